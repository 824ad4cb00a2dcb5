//! Sidebar navigation items.

use crate::dom;
use gamerec_core::DebugLogger;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
pub const NAV_TARGET_ATTR: &str = "data-href";
/// Marks an item whose handlers are attached.
pub const BOUND_ATTR: &str = "data-nav-bound";
const ACTIVE_CLASS: &str = "active";

fn is_active(item: &Element) -> bool {
    item.class_list().contains(ACTIVE_CLASS)
}

/// Whether `key` activates a navigation item.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn navigate(item: &Element, target: Option<&str>, logger: DebugLogger) {
    if is_active(item) {
        logger.debug(format_args!("Navigation prevented: Already on this page"));
        return;
    }
    let Some(href) = target else {
        return;
    };
    if let Some(win) = dom::window()
        && let Err(err) = win.location().set_href(href)
    {
        log::error!("Navigation to {href} failed: {}", dom::js_error_message(&err));
    }
}

fn prevent_default(item: &Element, event: &str) -> Result<(), wasm_bindgen::JsValue> {
    dom::listen(item, event, |event: Event| event.prevent_default())
}

fn bind_item(item: &Element, logger: DebugLogger) -> Result<(), wasm_bindgen::JsValue> {
    let target = item.get_attribute(NAV_TARGET_ATTR);
    if let Some(el) = item.dyn_ref::<HtmlElement>() {
        let cursor = if is_active(item) { "default" } else { "pointer" };
        el.style().set_property("cursor", cursor)?;
    }
    for attr in ["href", "title", "alt"] {
        item.remove_attribute(attr)?;
    }

    {
        let nav = item.clone();
        let target = target.clone();
        dom::listen(item, "click", move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            navigate(&nav, target.as_deref(), logger);
        })?;
    }
    {
        let nav = item.clone();
        dom::listen(item, "keydown", move |event: Event| {
            let activates = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| is_activation_key(&key.key()));
            if activates {
                event.prevent_default();
                event.stop_propagation();
                navigate(&nav, target.as_deref(), logger);
            }
        })?;
    }
    for event in ["contextmenu", "dragstart", "mousedown"] {
        prevent_default(item, event)?;
    }

    item.set_attribute("tabindex", "0")?;
    item.set_attribute("role", "button")?;
    item.set_attribute(BOUND_ATTR, "")
}

/// Bind every navigation item not bound yet. Returns how many were bound.
pub fn bind(logger: DebugLogger) -> usize {
    dom::query_all(NAV_ITEM_SELECTOR)
        .iter()
        .filter(|item| !item.has_attribute(BOUND_ATTR))
        .filter(|item| match bind_item(item, logger) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to bind navigation item: {}", dom::js_error_message(&err));
                false
            }
        })
        .count()
}
