//! The "About" dialog.

use crate::dom;
use crate::modal::bind_dismiss_triggers;
use gamerec_core::BindGuard;
use gamerec_core::surface::ids::OVERLAY;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

pub const ABOUT_MODAL_ID: &str = "aboutModal";
pub const ABOUT_CLOSE_ID: &str = "aboutModalClose";
pub const ABOUT_TITLE_ID: &str = "aboutModalTitle";
pub const ABOUT_IMAGE_ID: &str = "aboutModalImage";
pub const ABOUT_TEXT_ID: &str = "aboutModalText";

const SITE_TEXT: &str = concat!(
    "<p>Welcome to Game Recommender - your cyberpunk-themed guide to the gaming universe!</p>",
    "<p>As an avid gamer with thousands of hours spent across various genres, I developed this ",
    "application with great respect and passion for everyone who shares a love for video games. ",
    "This app is designed to help you discover games based on your preferences, including your ",
    "favorite genre, game features, developer studio, publisher, and release date.</p>",
    "<p>I would like to note in advance that this collection contains very few multiplayer titles ",
    "such as Call of Duty or World of Warcraft. It is primarily focused on single-player games ",
    "with rich storytelling, immersive atmospheres, and a variety of genres.</p>",
);

thread_local! {
    static TRIGGERS: BindGuard = const { BindGuard::new() };
}

/// What the About dialog displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub title: String,
    pub image_url: Option<String>,
    /// Raw markup for the body.
    pub html: String,
}

impl AboutContent {
    /// The site's own About text.
    #[must_use]
    pub fn site_default() -> Self {
        Self {
            title: "About Game Recommender".to_string(),
            image_url: Some("/images/about.jpg".to_string()),
            html: SITE_TEXT.to_string(),
        }
    }
}

pub fn open(content: &AboutContent) {
    dom::set_hidden_by_id(OVERLAY, false);
    dom::set_hidden_by_id(ABOUT_MODAL_ID, false);
    dom::lock_body_scroll(true);

    if let Some(title) = dom::element_by_id(ABOUT_TITLE_ID) {
        title.set_text_content(Some(&content.title));
    }
    if let (Some(src), Some(img)) = (
        content.image_url.as_deref().filter(|src| !src.is_empty()),
        dom::element_by_id(ABOUT_IMAGE_ID).and_then(|el| el.dyn_into::<HtmlImageElement>().ok()),
    ) {
        img.set_src(src);
        img.set_alt(&content.title);
    }
    if let Some(text) = dom::element_by_id(ABOUT_TEXT_ID) {
        text.set_inner_html(&content.html);
    }
}

pub fn close() {
    dom::set_hidden_by_id(OVERLAY, true);
    dom::set_hidden_by_id(ABOUT_MODAL_ID, true);
    dom::lock_body_scroll(false);
}

/// Bind the dialog's close triggers once.
///
/// Returns `false` when they were already bound.
pub fn bind() -> bool {
    if !TRIGGERS.with(BindGuard::claim) {
        return false;
    }
    if let Err(err) = bind_dismiss_triggers(ABOUT_CLOSE_ID, close) {
        log::error!("Failed to bind about dialog: {}", dom::js_error_message(&err));
    }
    true
}

/// Forget the bindings, for test fixtures that rebuild the page.
pub fn reset() {
    TRIGGERS.with(BindGuard::release);
}

#[wasm_bindgen(js_name = openAboutModal)]
pub fn open_about_modal(title: String, image_url: Option<String>, html: String) {
    open(&AboutContent {
        title,
        image_url,
        html,
    });
}

#[wasm_bindgen(js_name = closeAboutModal)]
pub fn close_about_modal() {
    close();
}
