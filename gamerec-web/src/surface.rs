//! The game details dialog as it exists in the page markup.

use crate::components::related_games::{Props as RelatedProps, RelatedGames};
use crate::dom;
use gamerec_core::surface::ids;
use gamerec_core::{
    ListField, ModalSurface, RelatedSelect, RelatedView, ScoreBand, ScoreField, TextField,
};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::{AppHandle, Callback, Renderer};

/// [`ModalSurface`] backed by the dialog elements of the current page.
///
/// Error and placeholder messages replace the whole content region; the
/// server-rendered markup is kept so the next load can put it back.
pub struct DomModalSurface {
    pristine_content: Option<String>,
    content_replaced: Cell<bool>,
    related: RefCell<Option<AppHandle<RelatedGames>>>,
}

impl DomModalSurface {
    /// Capture the dialog's initial content. Call once the page is parsed.
    #[must_use]
    pub fn from_page() -> Self {
        Self {
            pristine_content: dom::element_by_id(ids::CONTENT).map(|el| el.inner_html()),
            content_replaced: Cell::new(false),
            related: RefCell::new(None),
        }
    }

    fn unmount_related(&self) {
        if let Some(handle) = self.related.borrow_mut().take() {
            handle.destroy();
        }
    }

    fn restore_content(&self) {
        if !self.content_replaced.replace(false) {
            return;
        }
        self.unmount_related();
        if let (Some(content), Some(markup)) = (
            dom::element_by_id(ids::CONTENT),
            self.pristine_content.as_deref(),
        ) {
            content.set_inner_html(markup);
        }
    }
}

impl ModalSurface for DomModalSurface {
    fn show_dialog(&self) {
        dom::set_hidden_by_id(ids::OVERLAY, false);
        dom::set_hidden_by_id(ids::DIALOG, false);
        dom::lock_body_scroll(true);
    }

    fn hide_dialog(&self) {
        dom::set_hidden_by_id(ids::OVERLAY, true);
        dom::set_hidden_by_id(ids::DIALOG, true);
        dom::lock_body_scroll(false);
    }

    fn show_loading(&self) {
        self.restore_content();
        dom::set_display_by_id(ids::LOADING, "flex");
        dom::set_hidden_by_id(ids::CONTENT, true);
    }

    fn reveal_content(&self) {
        dom::set_display_by_id(ids::LOADING, "none");
        dom::set_hidden_by_id(ids::CONTENT, false);
    }

    fn set_text(&self, field: TextField, text: &str) {
        if let Some(el) = dom::element_by_id(field.element_id()) {
            el.set_text_content(Some(text));
        }
    }

    fn set_score_band(&self, field: ScoreField, band: ScoreBand) {
        if let Some(el) = dom::element_by_id(field.element_id()) {
            el.set_class_name(&band.class_name());
        }
    }

    fn set_image(&self, src: &str, alt: &str) {
        if let Some(img) = dom::element_by_id(ids::MAIN_IMAGE)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(src);
            img.set_alt(alt);
        }
    }

    fn set_body_html(&self, html: &str) {
        if let Some(el) = dom::element_by_id(ids::DESCRIPTION) {
            el.set_inner_html(html);
        }
    }

    fn populate_list(&self, field: ListField, items: &[String]) {
        let (Some(doc), Some(container)) = (dom::document(), dom::element_by_id(field.element_id()))
        else {
            return;
        };
        container.set_inner_html("");
        for item in items {
            let Ok(li) = doc.create_element("li") else {
                continue;
            };
            li.set_text_content(Some(item));
            let _ = container.append_child(&li);
        }
    }

    fn show_content_message(&self, html: &str) {
        self.unmount_related();
        if let Some(content) = dom::element_by_id(ids::CONTENT) {
            content.set_inner_html(html);
            self.content_replaced.set(true);
        }
        self.reveal_content();
    }

    fn show_related(&self, view: &RelatedView, on_select: RelatedSelect) {
        let props = RelatedProps {
            view: view.clone(),
            on_select: Callback::from(move |id: String| on_select(id)),
        };
        let mut slot = self.related.borrow_mut();
        if let Some(handle) = slot.as_mut() {
            handle.update(props);
            return;
        }
        if let Some(container) = dom::element_by_id(ids::RELATED_CONTAINER) {
            *slot = Some(Renderer::<RelatedGames>::with_root_and_props(container, props).render());
        }
    }
}
