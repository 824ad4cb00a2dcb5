//! Score badge classification.
//!
//! Metacritic scores use the 0-100 scale, user scores the raw 0-9.9 scale.

use crate::model::Scalar;

pub const METACRITIC_HIGH: i64 = 80;
pub const METACRITIC_MEDIUM: i64 = 50;
pub const USER_SCORE_HIGH: f64 = 8.0;
pub const USER_SCORE_MEDIUM: f64 = 5.0;

/// Base class every score badge keeps.
pub const SCORE_VALUE_CLASS: &str = "score-value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::High => "score-high",
            Self::Medium => "score-medium",
            Self::Low => "score-low",
        }
    }

    /// Full class attribute for a score badge.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{SCORE_VALUE_CLASS} {}", self.css_class())
    }

    fn from_thresholds<T: PartialOrd>(score: Option<T>, high: T, medium: T) -> Self {
        match score {
            Some(value) if value >= high => Self::High,
            Some(value) if value >= medium => Self::Medium,
            // Unparsable scores fail both comparisons.
            _ => Self::Low,
        }
    }
}

/// Band for a Metacritic score, `None` when no score is present.
#[must_use]
pub fn metacritic_band(score: &Scalar) -> Option<ScoreBand> {
    let text = score.display_text()?;
    Some(ScoreBand::from_thresholds(
        parse_int_prefix(&text),
        METACRITIC_HIGH,
        METACRITIC_MEDIUM,
    ))
}

/// Band for a user score, `None` when no score is present.
#[must_use]
pub fn user_score_band(score: &Scalar) -> Option<ScoreBand> {
    let text = score.display_text()?;
    Some(ScoreBand::from_thresholds(
        parse_float_prefix(&text),
        USER_SCORE_HIGH,
        USER_SCORE_MEDIUM,
    ))
}

/// Integer made of the leading digits of `text` (`"85.5"` reads as 85).
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = split_sign(trimmed);
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(idx, _)| idx);
    if end == 0 {
        return None;
    }
    // Only overflow can fail here; saturate so huge scores still band high.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Float made of the longest numeric prefix of `text` (`"8.7/10"` reads as 8.7).
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

fn split_sign(text: &str) -> (i64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else {
        (1, text)
    }
}
