//! Page configuration: endpoint templates, debug switches, transition delay.

use crate::logger::DebugConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder replaced by the game id in endpoint templates.
pub const ID_PLACEHOLDER: &str = "{id}";
pub const DEFAULT_DETAIL_ENDPOINT: &str = "/api/games/{id}/details";
pub const DEFAULT_RELATED_ENDPOINT: &str = "/recommendations/{id}/related";
pub const DEFAULT_RECOMMENDATIONS_ENDPOINT: &str = "/recommendations/results";
/// Pause between painting the fields and revealing the content.
pub const DEFAULT_TRANSITION_DELAY_MS: u32 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Backend endpoints used by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    pub game_details: String,
    pub related_games: String,
    pub recommendations: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            game_details: DEFAULT_DETAIL_ENDPOINT.to_string(),
            related_games: DEFAULT_RELATED_ENDPOINT.to_string(),
            recommendations: DEFAULT_RECOMMENDATIONS_ENDPOINT.to_string(),
        }
    }
}

impl Endpoints {
    #[must_use]
    pub fn detail_url(&self, id: &str) -> String {
        endpoint_for(&self.game_details, id)
    }

    #[must_use]
    pub fn related_url(&self, id: &str) -> String {
        endpoint_for(&self.related_games, id)
    }
}

/// Substitute the first `{id}` placeholder in `template`.
#[must_use]
pub fn endpoint_for(template: &str, id: &str) -> String {
    template.replacen(ID_PLACEHOLDER, id, 1)
}

/// Everything the page reads from its embedded configuration block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub debug: DebugConfig,
    pub transition_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            debug: DebugConfig::default(),
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Parse configuration; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
