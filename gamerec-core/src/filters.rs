//! Filter selection on the recommendations page.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const GET_RECOMMENDATIONS_LABEL: &str = "Get Recommendations";
pub const FINDING_GAMES_LABEL: &str = "Finding Games...";

/// Kind of a filter button, from its `data-filter` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Genre,
    Tag,
}

impl FilterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Tag => "tag",
        }
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(Self::Genre),
            "tag" => Ok(Self::Tag),
            other => Err(format!("Unknown filter kind: {other}")),
        }
    }
}

/// Body of the recommendations request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub tag: Vec<String>,
}

/// Values currently selected, in the order they were activated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    genre: Vec<String>,
    tag: Vec<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button's new state. Returns whether the selection changed.
    pub fn set(&mut self, kind: FilterKind, value: &str, active: bool) -> bool {
        let values = self.values_mut(kind);
        let position = values.iter().position(|existing| existing == value);
        match (active, position) {
            (true, None) => {
                values.push(value.to_string());
                true
            }
            (false, Some(index)) => {
                values.remove(index);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn values(&self, kind: FilterKind) -> &[String] {
        match kind {
            FilterKind::Genre => &self.genre,
            FilterKind::Tag => &self.tag,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genre.is_empty() && self.tag.is_empty()
    }

    #[must_use]
    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            genre: self.genre.clone(),
            tag: self.tag.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.genre.clear();
        self.tag.clear();
    }

    fn values_mut(&mut self, kind: FilterKind) -> &mut Vec<String> {
        match kind {
            FilterKind::Genre => &mut self.genre,
            FilterKind::Tag => &mut self.tag,
        }
    }
}

/// Label of the request button for the given loading state.
#[must_use]
pub const fn request_button_label(loading: bool) -> &'static str {
    if loading {
        FINDING_GAMES_LABEL
    } else {
        GET_RECOMMENDATIONS_LABEL
    }
}

/// Markup shown in the results container when the request fails.
#[must_use]
pub fn recommendation_error_html(message: &str) -> String {
    format!(
        r#"<div class="no-results error-message"><p>Failed to get recommendations. Please try again.</p><p class="error-details">{message}</p></div>"#
    )
}
