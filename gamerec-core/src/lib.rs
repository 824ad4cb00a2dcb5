//! Game Recommender interaction core
//!
//! Platform-agnostic logic behind the game details modal and the filter-driven
//! recommendations page. The DOM, the network and the event loop are reached
//! only through the [`DetailSource`], [`ModalSurface`] and [`Scheduler`] traits;
//! the `gamerec-web` crate provides the browser implementations.

pub mod binding;
pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod logger;
pub mod model;
pub mod related;
pub mod render;
pub mod scheduler;
pub mod scores;
pub mod surface;

use async_trait::async_trait;

// Re-export commonly used types
pub use binding::BindGuard;
pub use cache::DetailCache;
pub use config::{AppConfig, ConfigError, Endpoints, endpoint_for};
pub use controller::{LoadOutcome, ModalController};
pub use error::FetchError;
pub use filters::{FilterKind, FilterSelection, RecommendationRequest};
pub use logger::{DebugConfig, DebugLogger, Subsystem};
pub use model::{DetailPayload, RelatedItem, Scalar};
pub use related::{RelatedView, rank_related};
pub use render::{RenderGuardError, render_detail};
pub use scheduler::Scheduler;
pub use scores::{ScoreBand, metacritic_band, user_score_band};
pub use surface::{ListField, ModalSurface, RelatedSelect, ScoreField, TextField};

/// Remote source of game details and related games.
/// Platform-specific implementations should provide this
#[async_trait(?Send)]
pub trait DetailSource {
    /// Fetch the detail payload for one game.
    ///
    /// A successful response whose body is JSON `null` yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Remote`] for non-2xx responses,
    /// [`FetchError::Transport`] when the request never completes and
    /// [`FetchError::Decode`] when the body is not a detail payload.
    async fn fetch_detail(&self, id: &str) -> Result<Option<DetailPayload>, FetchError>;

    /// Fetch the unordered list of games related to `entity`.
    ///
    /// # Errors
    ///
    /// Same contract as [`DetailSource::fetch_detail`].
    async fn fetch_related(&self, entity: &DetailPayload) -> Result<Vec<RelatedItem>, FetchError>;
}
