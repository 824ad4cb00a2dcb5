//! Game details modal controller.
//!
//! Opening the dialog is synchronous up to the first network request: the
//! backdrop, dialog, loading indicator and scroll lock are all updated before
//! [`ModalController::open`] returns its future. Every load takes a fresh
//! generation number and only the newest generation may paint, so a slow
//! response for a game the user already navigated away from is dropped.

use crate::DetailSource;
use crate::cache::DetailCache;
use crate::error::FetchError;
use crate::logger::DebugLogger;
use crate::model::DetailPayload;
use crate::related::RelatedView;
use crate::render::{detail_error_html, render_detail};
use crate::scheduler::Scheduler;
use crate::surface::{ModalSurface, RelatedSelect};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Result of a completed load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The payload was painted.
    Rendered(DetailPayload),
    /// The backend had no data; the placeholder was painted.
    MissingPayload,
    /// A newer load started before this one finished; nothing was painted.
    Superseded,
}

/// Future returned by [`ModalController::open`] and [`ModalController::load`].
pub type LoadFuture = LocalBoxFuture<'static, Result<LoadOutcome, FetchError>>;

struct Inner<S, V, T> {
    source: S,
    view: V,
    scheduler: T,
    cache: RefCell<DetailCache>,
    generation: Cell<u64>,
    transition_delay_ms: u32,
    logger: DebugLogger,
}

/// Drives the game details dialog.
///
/// Cloning is cheap and every clone controls the same dialog and cache.
pub struct ModalController<S, V, T> {
    inner: Rc<Inner<S, V, T>>,
}

impl<S, V, T> Clone for ModalController<S, V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, V, T> ModalController<S, V, T>
where
    S: DetailSource + 'static,
    V: ModalSurface + 'static,
    T: Scheduler + 'static,
{
    #[must_use]
    pub fn new(
        source: S,
        view: V,
        scheduler: T,
        transition_delay_ms: u32,
        logger: DebugLogger,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                source,
                view,
                scheduler,
                cache: RefCell::new(DetailCache::new()),
                generation: Cell::new(0),
                transition_delay_ms,
                logger,
            }),
        }
    }

    /// Show the dialog for `id` and load its details.
    ///
    /// The dialog is visible and the loading indicator shown when this
    /// returns. The future resolves once the primary payload is painted; the
    /// related games request keeps running in the background.
    pub fn open(&self, id: &str) -> LoadFuture {
        self.inner
            .logger
            .debug(format_args!("Opening modal for game: {id}"));
        self.inner.view.show_dialog();
        self.load(id)
    }

    /// Hide the dialog and release the scroll lock.
    pub fn close(&self) {
        self.inner.view.hide_dialog();
        self.inner.logger.debug(format_args!("Game details modal closed"));
    }

    /// Load `id` into the already visible dialog.
    pub fn load(&self, id: &str) -> LoadFuture {
        self.inner.view.show_loading();
        let generation = self.next_generation();
        let this = self.clone();
        let id = id.to_owned();
        async move { this.run(id, generation).await }.boxed_local()
    }

    /// Whether details for `id` are cached.
    #[must_use]
    pub fn is_cached(&self, id: &str) -> bool {
        self.inner.cache.borrow().contains(id)
    }

    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    /// Drop cached details and supersede any load in flight.
    pub fn reset(&self) {
        self.inner.cache.borrow_mut().reset();
        self.next_generation();
    }

    async fn run(&self, id: String, generation: u64) -> Result<LoadOutcome, FetchError> {
        let cached = self.inner.cache.borrow().get(&id).cloned();
        let payload = if let Some(payload) = cached {
            self.inner
                .logger
                .debug(format_args!("Using cached game details for: {id}"));
            Some(payload)
        } else {
            self.inner
                .logger
                .debug(format_args!("Fetching game details from API for: {id}"));
            match self.inner.source.fetch_detail(&id).await {
                Ok(Some(payload)) => {
                    self.inner.cache.borrow_mut().put(id.clone(), payload.clone());
                    Some(payload)
                }
                Ok(None) => None,
                Err(err) => {
                    self.inner
                        .logger
                        .debug(format_args!("Error fetching game details: {err}"));
                    if self.is_current(generation) {
                        self.inner
                            .view
                            .show_content_message(&detail_error_html(&err.to_string()));
                    }
                    return Err(err);
                }
            }
        };

        if !self.is_current(generation) {
            self.inner
                .logger
                .debug(format_args!("Discarding superseded details for: {id}"));
            return Ok(LoadOutcome::Superseded);
        }

        let Some(payload) = payload else {
            if let Err(guard) = render_detail(&self.inner.view, None) {
                self.inner.logger.debug(format_args!("{guard}"));
            }
            return Ok(LoadOutcome::MissingPayload);
        };

        if render_detail(&self.inner.view, Some(&payload)).is_ok() {
            self.inner
                .logger
                .debug(format_args!("Displaying game details: {id}"));
        }
        self.spawn_related(payload.clone(), generation);
        self.schedule_reveal(generation);
        Ok(LoadOutcome::Rendered(payload))
    }

    fn spawn_related(&self, entity: DetailPayload, generation: u64) {
        self.inner
            .view
            .show_related(&RelatedView::Pending, self.related_select());
        let this = self.clone();
        self.inner.scheduler.spawn(
            async move {
                let view = match this.inner.source.fetch_related(&entity).await {
                    Ok(items) => RelatedView::from_response(items),
                    Err(err) => {
                        this.inner
                            .logger
                            .debug(format_args!("Error loading related games: {err}"));
                        RelatedView::Failed
                    }
                };
                if this.is_current(generation) {
                    this.inner.view.show_related(&view, this.related_select());
                }
            }
            .boxed_local(),
        );
    }

    fn schedule_reveal(&self, generation: u64) {
        let delay = self.inner.scheduler.delay(self.inner.transition_delay_ms);
        let this = self.clone();
        self.inner.scheduler.spawn(
            async move {
                delay.await;
                if this.is_current(generation) {
                    this.inner.view.reveal_content();
                }
            }
            .boxed_local(),
        );
    }

    // Weak so the page's click handlers do not keep the controller alive.
    fn related_select(&self) -> RelatedSelect {
        let weak: Weak<Inner<S, V, T>> = Rc::downgrade(&self.inner);
        Rc::new(move |id: String| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let controller = Self { inner };
            controller
                .inner
                .logger
                .debug(format_args!("Related game clicked: {id}"));
            let pending = controller.load(&id);
            let logger = controller.inner.logger;
            controller.inner.scheduler.spawn(
                async move {
                    if let Err(err) = pending.await {
                        logger.debug(format_args!("Error loading related game details: {err}"));
                    }
                }
                .boxed_local(),
            );
        })
    }

    fn next_generation(&self) -> u64 {
        let next = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner.generation.get() == generation
    }
}
