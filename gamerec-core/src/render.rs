//! Projection of a detail payload onto the dialog fields.

use crate::model::{DetailPayload, Scalar, present};
use crate::scores::{metacritic_band, user_score_band};
use crate::surface::{ListField, ModalSurface, ScoreField, TextField};
use thiserror::Error;

/// Text shown for any missing field.
pub const NOT_AVAILABLE: &str = "Not available";
pub const NO_DESCRIPTION_HTML: &str = "<p>No description available</p>";
pub const MISSING_PAYLOAD_HTML: &str =
    r#"<div class="error-message">Error: No game data available</div>"#;

/// Payload problems the renderer absorbs by painting a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderGuardError {
    #[error("No game data provided")]
    MissingPayload,
}

/// Markup for a failed detail request.
#[must_use]
pub fn detail_error_html(message: &str) -> String {
    format!(r#"<div class="error-message">Error loading game details: {message}</div>"#)
}

/// Description markup: pre-rendered details, then the plain description,
/// then a placeholder.
#[must_use]
pub fn description_html(payload: &DetailPayload) -> &str {
    present(payload.details_html.as_ref())
        .or_else(|| present(payload.description.as_ref()))
        .unwrap_or(NO_DESCRIPTION_HTML)
}

/// Paint `payload` onto `view`.
///
/// # Errors
///
/// Returns [`RenderGuardError::MissingPayload`] after painting the
/// "no game data" placeholder when `payload` is `None`.
pub fn render_detail<V: ModalSurface + ?Sized>(
    view: &V,
    payload: Option<&DetailPayload>,
) -> Result<(), RenderGuardError> {
    let Some(payload) = payload else {
        view.show_content_message(MISSING_PAYLOAD_HTML);
        return Err(RenderGuardError::MissingPayload);
    };

    set_text(view, TextField::Title, payload.title.as_ref());
    set_text(view, TextField::Developer, payload.developer.as_ref());
    set_text(view, TextField::Publisher, payload.publisher.as_ref());
    set_text(view, TextField::ReleaseDate, payload.release_date.as_ref());

    set_scalar(view, TextField::MetacriticScore, payload.metacritic_score.as_ref());
    set_scalar(view, TextField::UserScore, payload.user_score.as_ref());
    if let Some(band) = payload.metacritic_score.as_ref().and_then(metacritic_band) {
        view.set_score_band(ScoreField::Metacritic, band);
    }
    if let Some(band) = payload.user_score.as_ref().and_then(user_score_band) {
        view.set_score_band(ScoreField::User, band);
    }

    set_scalar(view, TextField::AgeRating, payload.age_rating.as_ref());
    view.set_text(
        TextField::Multiplayer,
        if payload.is_multiplayer() { "Yes" } else { "No" },
    );
    set_scalar(view, TextField::Playtime, payload.playtime.as_ref());
    set_scalar(view, TextField::Price, payload.price.as_ref());

    if let Some(src) = present(payload.image_url.as_ref()) {
        view.set_image(src, payload.title.as_deref().unwrap_or_default());
    }

    view.set_body_html(description_html(payload));

    populate(view, ListField::Platforms, payload.platforms.as_deref());
    populate(view, ListField::Genres, payload.genres.as_deref());
    populate(view, ListField::Tags, payload.tags.as_deref());

    if let Some(date) = present(payload.release_date.as_ref()) {
        view.set_text(TextField::ReleaseDateDisplay, date);
    }

    Ok(())
}

fn set_text<V: ModalSurface + ?Sized>(view: &V, field: TextField, value: Option<&String>) {
    view.set_text(field, present(value).unwrap_or(NOT_AVAILABLE));
}

fn set_scalar<V: ModalSurface + ?Sized>(view: &V, field: TextField, value: Option<&Scalar>) {
    let text = value.and_then(Scalar::display_text);
    view.set_text(field, text.as_deref().unwrap_or(NOT_AVAILABLE));
}

// Absent or empty lists leave whatever the container already shows.
fn populate<V: ModalSurface + ?Sized>(view: &V, field: ListField, items: Option<&[String]>) {
    if let Some(items) = items.filter(|items| !items.is_empty()) {
        view.populate_list(field, items);
    }
}
