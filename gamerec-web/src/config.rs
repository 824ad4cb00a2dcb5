//! Reads the page's embedded configuration block.

use crate::dom;
use gamerec_core::AppConfig;

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Configuration for this page; defaults when the block is missing or invalid.
#[must_use]
pub fn load() -> AppConfig {
    let Some(json) = dom::element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return AppConfig::default();
    };
    parse_or_default(&json)
}

/// Parse `json`, logging and falling back to defaults on error.
#[must_use]
pub fn parse_or_default(json: &str) -> AppConfig {
    if json.trim().is_empty() {
        return AppConfig::default();
    }
    AppConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("Invalid page configuration, using defaults: {err}");
        AppConfig::default()
    })
}
