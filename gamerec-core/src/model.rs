use serde::{Deserialize, Serialize};

use crate::scores::parse_float_prefix;

/// A scalar field the backend may send as a string, a number or a boolean.
///
/// Scores, prices and playtimes arrive as whatever the backend serialised
/// them as; the modal only ever shows their textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    /// Text shown for the value, or `None` when the value counts as absent
    /// (empty text, numeric zero, `false`).
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => {
                if number.as_f64().is_some_and(|value| value == 0.0) {
                    None
                } else {
                    Some(format_number(number))
                }
            }
            Self::Flag(true) => Some(String::from("true")),
            Self::Flag(false) => None,
        }
    }

    /// Whether the value counts as present.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.display_text().is_some()
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Flag(false), Self::Number)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

// Whole floats print without a fraction so `9.0` shows as `9`.
fn format_number(number: &serde_json::Number) -> String {
    if number.is_f64()
        && let Some(value) = number.as_f64()
        && value.fract() == 0.0
        && value.abs() < 1e15
    {
        #[allow(clippy::cast_possible_truncation)]
        return format!("{}", value as i64);
    }
    number.to_string()
}

/// Detail record for one game, as served by the details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub metacritic_score: Option<Scalar>,
    #[serde(default)]
    pub user_score: Option<Scalar>,
    #[serde(default)]
    pub age_rating: Option<Scalar>,
    #[serde(default, alias = "playtimeHours")]
    pub playtime: Option<Scalar>,
    #[serde(default)]
    pub price: Option<Scalar>,
    #[serde(default, alias = "isMultiplayer")]
    pub multiplayer: Option<Scalar>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub details_html: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl DetailPayload {
    /// Payload carrying only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            developer: None,
            publisher: None,
            release_date: None,
            metacritic_score: None,
            user_score: None,
            age_rating: None,
            playtime: None,
            price: None,
            multiplayer: None,
            image_url: None,
            details_html: None,
            description: None,
            platforms: None,
            genres: None,
            tags: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the game supports multiplayer; absent counts as no.
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.multiplayer.as_ref().is_some_and(Scalar::is_truthy)
    }

    /// Load a payload from JSON; `null` yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is neither `null` nor a detail payload.
    pub fn from_json(json: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A game similar to the one on display.
///
/// The related endpoint serialises every field as text, so `rating` is kept
/// as a [`Scalar`] and only read as a number when ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rating: Option<Scalar>,
}

impl RelatedItem {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rating: rating.map(Scalar::from),
        }
    }

    /// Rating used for ranking. Numeric text reads by its leading number;
    /// missing or unparsable ratings rank as zero.
    #[must_use]
    pub fn rank_score(&self) -> f64 {
        match &self.rating {
            Some(Scalar::Number(number)) => number.as_f64(),
            Some(Scalar::Text(text)) => parse_float_prefix(text),
            Some(Scalar::Flag(_)) | None => None,
        }
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
    }
}

/// Present, non-empty text.
#[must_use]
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}
