//! Header action buttons.

use crate::about::{self, AboutContent};
use crate::dom;
use gamerec_core::{BindGuard, DebugLogger};

pub const ABOUT_BUTTON_ID: &str = "aboutBtn";
pub const SEARCH_BUTTON_ID: &str = "searchBtn";

thread_local! {
    static BUTTONS: BindGuard = const { BindGuard::new() };
}

/// Bind the About and Search buttons once; missing buttons are skipped.
pub fn bind(logger: DebugLogger) -> bool {
    if !BUTTONS.with(BindGuard::claim) {
        return false;
    }
    if let Some(button) = dom::element_by_id(ABOUT_BUTTON_ID) {
        let bound = dom::listen(&button, "click", |_| {
            about::open(&AboutContent::site_default());
        });
        if let Err(err) = bound {
            log::error!("Failed to bind about button: {}", dom::js_error_message(&err));
        }
    }
    if let Some(button) = dom::element_by_id(SEARCH_BUTTON_ID) {
        // No search dialog exists on this site.
        let bound = dom::listen(&button, "click", move |_| {
            logger.debug(format_args!("Search button clicked"));
        });
        if let Err(err) = bound {
            log::error!("Failed to bind search button: {}", dom::js_error_message(&err));
        }
    }
    true
}

pub fn reset() {
    BUTTONS.with(BindGuard::release);
}
