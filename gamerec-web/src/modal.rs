//! Page-wide game details dialog and its JavaScript entry points.

use crate::client::HttpClient;
use crate::config;
use crate::dom;
use crate::scheduler::BrowserScheduler;
use crate::surface::DomModalSurface;
use gamerec_core::surface::ids;
use gamerec_core::{AppConfig, BindGuard, FetchError, LoadOutcome, ModalController, Subsystem};
use js_sys::Promise;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Element, Event, KeyboardEvent};

pub type PageController = ModalController<HttpClient, DomModalSurface, BrowserScheduler>;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
    static CLOSE_TRIGGERS: BindGuard = const { BindGuard::new() };
}

/// Build the page controller from `config`, replacing any previous one.
pub fn init(config: &AppConfig) -> PageController {
    let controller = ModalController::new(
        HttpClient::new(config.endpoints.clone()),
        DomModalSurface::from_page(),
        BrowserScheduler,
        config.transition_delay_ms,
        config.debug.logger(Subsystem::Modal),
    );
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller.clone()));
    controller
}

/// The page controller, built from the page configuration on first use.
pub fn controller() -> PageController {
    if let Some(existing) = CONTROLLER.with(|slot| slot.borrow().clone()) {
        return existing;
    }
    init(&config::load())
}

/// Drop the controller and its cache, and forget the close bindings.
pub fn reset() {
    if let Some(existing) = CONTROLLER.with(|slot| slot.borrow_mut().take()) {
        existing.reset();
    }
    CLOSE_TRIGGERS.with(BindGuard::release);
}

/// Bind the close button, backdrop and Escape key once.
///
/// Returns `false` when the triggers were already bound.
pub fn bind_close_triggers() -> bool {
    bind_close_triggers_to(close)
}

/// Bind the dialog's close triggers to `on_close`, once per page.
///
/// Shares its guard with [`bind_close_triggers`].
pub fn bind_close_triggers_to(on_close: fn()) -> bool {
    if !CLOSE_TRIGGERS.with(BindGuard::claim) {
        return false;
    }
    if let Err(err) = bind_dismiss_triggers(ids::CLOSE_BUTTON, on_close) {
        log::error!(
            "Failed to bind game details close triggers: {}",
            dom::js_error_message(&err)
        );
    }
    true
}

/// Wire `close` to its button, a click on the backdrop itself, and Escape.
///
/// Missing elements are skipped.
pub(crate) fn bind_dismiss_triggers(close_button_id: &str, close: fn()) -> Result<(), JsValue> {
    if let Some(button) = dom::element_by_id(close_button_id) {
        dom::listen(&button, "click", move |_| close())?;
    }
    if let Some(overlay) = dom::element_by_id(ids::OVERLAY) {
        let backdrop = overlay.clone();
        dom::listen(&overlay, "click", move |event: Event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target == backdrop);
            if on_backdrop {
                close();
            }
        })?;
    }
    if let Some(doc) = dom::document() {
        dom::listen(&doc, "keydown", move |event: Event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                close();
            }
        })?;
    }
    Ok(())
}

/// Open the dialog for `id` without waiting for the result.
pub fn open_detached(id: &str) {
    let pending = controller().open(id);
    let id = id.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = pending.await {
            log::error!("Failed to load game {id}: {err}");
        }
    });
}

pub fn close() {
    controller().close();
}

fn outcome_to_js(outcome: LoadOutcome) -> Result<JsValue, JsValue> {
    match outcome {
        LoadOutcome::Rendered(payload) => {
            serde_wasm_bindgen::to_value(&payload).map_err(JsValue::from)
        }
        LoadOutcome::MissingPayload => Ok(JsValue::NULL),
        LoadOutcome::Superseded => Ok(JsValue::UNDEFINED),
    }
}

fn error_to_js(err: &FetchError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// `openGameDetailsModal(id)`: resolves with the rendered payload, rejects
/// with an `Error` when the details cannot be loaded.
#[wasm_bindgen(js_name = openGameDetailsModal)]
pub fn open_game_details_modal(id: String) -> Promise {
    let pending = controller().open(&id);
    future_to_promise(async move {
        match pending.await {
            Ok(outcome) => outcome_to_js(outcome),
            Err(err) => Err(error_to_js(&err)),
        }
    })
}

#[wasm_bindgen(js_name = closeGameDetailsModal)]
pub fn close_game_details_modal() {
    close();
}
