#![forbid(unsafe_code)]
//! Browser side of Game Recommender.
//!
//! Wires the server-rendered pages to [`gamerec_core`]: the game details and
//! About dialogs, header buttons, game cards, sidebar navigation and the
//! recommendations form.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod about;
pub mod cards;
pub mod client;
pub mod components;
pub mod config;
pub mod dom;
pub mod header;
pub mod logging;
pub mod modal;
pub mod navigation;
pub mod recommendations;
pub mod scheduler;
pub mod surface;

use gamerec_core::{AppConfig, Subsystem};

/// Bind every handler the current page needs.
///
/// Safe to call more than once; dialog and header triggers are bound a
/// single time and already bound game cards are skipped.
pub fn boot(config: &AppConfig) {
    let general = config.debug.logger(Subsystem::General);
    general.debug(format_args!("Binding page handlers"));

    modal::init(config);
    modal::bind_close_triggers();
    about::bind();
    header::bind(general);
    cards::bind_all(config.debug.logger(Subsystem::Modal));
    navigation::bind(general);

    if dom::element_by_id(recommendations::REQUEST_BUTTON_ID).is_some() {
        let page = recommendations::RecommendationsPage::new(
            client::HttpClient::new(config.endpoints.clone()),
            config.debug.logger(Subsystem::Recommendations),
        );
        page.bind();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();

    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        let bound = dom::listen(&doc, "DOMContentLoaded", |_| boot(&config::load()));
        if let Err(err) = bound {
            log::error!("Failed to wait for the page: {}", dom::js_error_message(&err));
        }
    } else {
        boot(&config::load());
    }
}
