//! The dialog as seen by the controller.
//!
//! Element ids are the contract between the server-rendered markup and the
//! interaction layer; they must stay in sync with the templates.

use crate::related::RelatedView;
use crate::scores::ScoreBand;
use std::rc::Rc;

/// Element ids of the game details dialog.
pub mod ids {
    pub const OVERLAY: &str = "modalOverlay";
    pub const DIALOG: &str = "gameDetailsModal";
    pub const CLOSE_BUTTON: &str = "modalCloseBtn";
    pub const LOADING: &str = "loadingSpinner";
    pub const CONTENT: &str = "gameDetailsContent";
    pub const MAIN_IMAGE: &str = "gameMainImage";
    pub const DESCRIPTION: &str = "gameDescription";
    pub const RELATED_CONTAINER: &str = "relatedGamesContainer";
}

/// Single-value text fields of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Developer,
    Publisher,
    ReleaseDate,
    MetacriticScore,
    UserScore,
    AgeRating,
    Multiplayer,
    Playtime,
    Price,
    ReleaseDateDisplay,
}

impl TextField {
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Title => "gameTitle",
            Self::Developer => "gameDeveloper",
            Self::Publisher => "gamePublisher",
            Self::ReleaseDate => "gameReleaseDate",
            Self::MetacriticScore => "metacriticScore",
            Self::UserScore => "userScore",
            Self::AgeRating => "ageRating",
            Self::Multiplayer => "multiplayer",
            Self::Playtime => "playtime",
            Self::Price => "price",
            Self::ReleaseDateDisplay => "releaseDateDisplay",
        }
    }
}

/// Score badges; they share their element with the matching text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreField {
    Metacritic,
    User,
}

impl ScoreField {
    #[must_use]
    pub const fn text_field(self) -> TextField {
        match self {
            Self::Metacritic => TextField::MetacriticScore,
            Self::User => TextField::UserScore,
        }
    }

    #[must_use]
    pub const fn element_id(self) -> &'static str {
        self.text_field().element_id()
    }
}

/// Multi-valued attributes shown as `<li>` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Platforms,
    Genres,
    Tags,
}

impl ListField {
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Platforms => "platformsList",
            Self::Genres => "genresList",
            Self::Tags => "tagsList",
        }
    }
}

/// Invoked with a game id when a related game is clicked.
pub type RelatedSelect = Rc<dyn Fn(String)>;

/// Rendering target of the game details dialog.
///
/// Methods take `&self`; implementations mutate the page (or a recording of
/// it) through interior mutability, as the DOM does.
pub trait ModalSurface {
    /// Unhide backdrop and dialog and lock page scrolling.
    fn show_dialog(&self);
    /// Hide backdrop and dialog and release the scroll lock.
    fn hide_dialog(&self);
    /// Show the loading indicator and hide the content region.
    fn show_loading(&self);
    /// Hide the loading indicator and show the content region.
    fn reveal_content(&self);
    fn set_text(&self, field: TextField, text: &str);
    fn set_score_band(&self, field: ScoreField, band: ScoreBand);
    fn set_image(&self, src: &str, alt: &str);
    /// Replace the description markup.
    fn set_body_html(&self, html: &str);
    /// Replace the items of a list container.
    fn populate_list(&self, field: ListField, items: &[String]);
    /// Replace the whole content region with `html` and make it visible.
    fn show_content_message(&self, html: &str);
    /// Replace the related games section.
    fn show_related(&self, view: &RelatedView, on_select: RelatedSelect);
}
