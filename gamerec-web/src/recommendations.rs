//! Filter buttons and the recommendations request.

use crate::cards;
use crate::client::HttpClient;
use crate::dom;
use gamerec_core::filters::{recommendation_error_html, request_button_label};
use gamerec_core::{BindGuard, DebugLogger, FilterKind, FilterSelection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, ScrollBehavior, ScrollToOptions};

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-button";
pub const REQUEST_BUTTON_ID: &str = "get-recommendations";
pub const RESULTS_ID: &str = "recommendation-results";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const SECTION_SELECTOR: &str = ".recommendation-section";
pub const RESULT_CARDS_SELECTOR: &str = "#recommendation-results .game-card";
/// Space kept above the results heading after scrolling.
pub const SCROLL_OFFSET_PX: f64 = 100.0;
const ACTIVE_CLASS: &str = "active";

thread_local! {
    static FORM: BindGuard = const { BindGuard::new() };
}

/// The recommendations page: current filter selection and its backend.
pub struct RecommendationsPage {
    selection: RefCell<FilterSelection>,
    client: HttpClient,
    logger: DebugLogger,
}

impl RecommendationsPage {
    #[must_use]
    pub fn new(client: HttpClient, logger: DebugLogger) -> Rc<Self> {
        Rc::new(Self {
            selection: RefCell::new(FilterSelection::new()),
            client,
            logger,
        })
    }

    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        self.selection.borrow().clone()
    }

    /// Toggle `button`'s active state and record it in the selection.
    pub fn toggle(&self, button: &Element) {
        let (Some(kind), Some(value)) = (
            button.get_attribute("data-filter"),
            button.get_attribute("data-value"),
        ) else {
            return;
        };
        let kind = match kind.parse::<FilterKind>() {
            Ok(kind) => kind,
            Err(err) => {
                self.logger.debug(format_args!("{err}"));
                return;
            }
        };
        let active = button.class_list().toggle(ACTIVE_CLASS).unwrap_or(false);
        if self.selection.borrow_mut().set(kind, &value, active) {
            let verb = if active { "Added" } else { "Removed" };
            self.logger
                .debug(format_args!("{verb} {} filter: {value}", kind.as_str()));
        }
    }

    /// Request recommendations for the current selection and show them.
    #[allow(clippy::future_not_send)]
    pub async fn request(&self) {
        let request = self.selection.borrow().to_request();
        self.logger
            .debug(format_args!("Sending filters to server: {request:?}"));
        set_loading(true);
        match self.client.post_recommendations(&request).await {
            Ok(fragment) => {
                self.logger.debug(format_args!(
                    "Received HTML fragment from server ({} bytes)",
                    fragment.len()
                ));
                show_results(&fragment);
                scroll_to_results();
                let bound = cards::bind(RESULT_CARDS_SELECTOR, self.logger);
                self.logger
                    .debug(format_args!("Attached click handlers to {bound} game cards"));
            }
            Err(err) => {
                log::error!("Failed to get recommendations: {err}");
                show_error(&err.to_string());
            }
        }
        set_loading(false);
    }

    /// Bind the filter buttons and the request button once per page.
    ///
    /// Returns `false` when the form was already bound.
    pub fn bind(self: &Rc<Self>) -> bool {
        if !FORM.with(BindGuard::claim) {
            return false;
        }
        for button in dom::query_all(FILTER_BUTTON_SELECTOR) {
            let page = Rc::clone(self);
            let target = button.clone();
            if let Err(err) = dom::listen(&button, "click", move |_| page.toggle(&target)) {
                log::error!("Failed to bind filter button: {}", dom::js_error_message(&err));
            }
        }
        let Some(request_button) = dom::element_by_id(REQUEST_BUTTON_ID) else {
            return true;
        };
        let page = Rc::clone(self);
        let bound = dom::listen(&request_button, "click", move |_| {
            let page = Rc::clone(&page);
            wasm_bindgen_futures::spawn_local(async move { page.request().await });
        });
        if let Err(err) = bound {
            log::error!("Failed to bind recommendations button: {}", dom::js_error_message(&err));
        }
        true
    }
}

fn set_loading(loading: bool) {
    if let Some(button) = dom::element_by_id(REQUEST_BUTTON_ID) {
        button.set_text_content(Some(request_button_label(loading)));
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(loading);
        }
    }
    if let Some(overlay) = dom::element_by_id(LOADING_OVERLAY_ID) {
        let _ = overlay
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, loading);
    }
}

fn show_results(fragment: &str) {
    if let Some(results) = dom::element_by_id(RESULTS_ID) {
        results.set_inner_html(fragment);
    }
    dom::set_display_by_id(RESULTS_ID, "grid");
}

fn show_error(message: &str) {
    if let Some(results) = dom::element_by_id(RESULTS_ID) {
        results.set_inner_html(&recommendation_error_html(message));
    }
    dom::set_display_by_id(RESULTS_ID, "block");
}

fn scroll_to_results() {
    let (Some(win), Some(section)) = (
        dom::window(),
        dom::document().and_then(|doc| doc.query_selector(SECTION_SELECTOR).ok().flatten()),
    ) else {
        return;
    };
    let scroll_top = win.page_y_offset().unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(scroll_top + section.get_bounding_client_rect().top() - SCROLL_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}
