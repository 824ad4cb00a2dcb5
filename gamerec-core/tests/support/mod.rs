#![allow(dead_code)]

use async_trait::async_trait;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::{self, LocalBoxFuture};
use futures::task::LocalSpawnExt;
use gamerec_core::{
    DebugLogger, DetailPayload, DetailSource, FetchError, ListField, LoadOutcome, ModalController,
    ModalSurface, RelatedItem, RelatedSelect, RelatedView, ScoreBand, ScoreField, Scheduler,
    Subsystem, TextField,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type DetailResult = Result<Option<DetailPayload>, FetchError>;

#[derive(Default)]
struct SourceState {
    details: RefCell<HashMap<String, DetailResult>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<DetailResult>>>,
    related: RefCell<HashMap<String, Result<Vec<RelatedItem>, FetchError>>>,
    detail_calls: RefCell<Vec<String>>,
    related_calls: RefCell<Vec<String>>,
}

/// Backend double that answers from canned responses and records requests.
#[derive(Clone, Default)]
pub struct FakeSource {
    state: Rc<SourceState>,
}

impl FakeSource {
    pub fn add_detail(&self, payload: DetailPayload) {
        self.state
            .details
            .borrow_mut()
            .insert(payload.id.clone(), Ok(Some(payload)));
    }

    pub fn set_detail_result(&self, id: &str, result: DetailResult) {
        self.state.details.borrow_mut().insert(id.to_string(), result);
    }

    pub fn set_related(&self, id: &str, result: Result<Vec<RelatedItem>, FetchError>) {
        self.state.related.borrow_mut().insert(id.to_string(), result);
    }

    /// Hold the next detail request for `id` until the sender fires.
    pub fn gate(&self, id: &str) -> oneshot::Sender<DetailResult> {
        let (tx, rx) = oneshot::channel();
        self.state.gates.borrow_mut().insert(id.to_string(), rx);
        tx
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.state.detail_calls.borrow().clone()
    }

    pub fn related_calls(&self) -> Vec<String> {
        self.state.related_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DetailSource for FakeSource {
    async fn fetch_detail(&self, id: &str) -> DetailResult {
        self.state.detail_calls.borrow_mut().push(id.to_string());
        let gate = self.state.gates.borrow_mut().remove(id);
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".into())));
        }
        self.state
            .details
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or(Err(FetchError::Remote { status: 404 }))
    }

    async fn fetch_related(&self, entity: &DetailPayload) -> Result<Vec<RelatedItem>, FetchError> {
        self.state.related_calls.borrow_mut().push(entity.id.clone());
        self.state
            .related
            .borrow()
            .get(&entity.id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// What the dialog currently shows.
pub struct SurfaceState {
    pub overlay_hidden: bool,
    pub dialog_hidden: bool,
    pub scroll_locked: bool,
    pub loading_visible: bool,
    pub content_visible: bool,
    pub loading_shown: usize,
    pub texts: HashMap<TextField, String>,
    pub bands: HashMap<ScoreField, ScoreBand>,
    pub image: Option<(String, String)>,
    pub body_html: Option<String>,
    pub lists: HashMap<ListField, Vec<String>>,
    pub content_message: Option<String>,
    pub related: Option<RelatedView>,
    pub related_select: Option<RelatedSelect>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            overlay_hidden: true,
            dialog_hidden: true,
            scroll_locked: false,
            loading_visible: false,
            content_visible: false,
            loading_shown: 0,
            texts: HashMap::new(),
            bands: HashMap::new(),
            image: None,
            body_html: None,
            lists: HashMap::new(),
            content_message: None,
            related: None,
            related_select: None,
        }
    }
}

/// In-memory dialog that records every change.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    pub fn text(&self, field: TextField) -> Option<String> {
        self.state.borrow().texts.get(&field).cloned()
    }

    pub fn band(&self, field: ScoreField) -> Option<ScoreBand> {
        self.state.borrow().bands.get(&field).copied()
    }

    pub fn list(&self, field: ListField) -> Option<Vec<String>> {
        self.state.borrow().lists.get(&field).cloned()
    }

    pub fn related(&self) -> Option<RelatedView> {
        self.state.borrow().related.clone()
    }

    pub fn related_titles(&self) -> Vec<String> {
        self.related()
            .map(|view| view.items().iter().map(|item| item.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl ModalSurface for RecordingSurface {
    fn show_dialog(&self) {
        let mut state = self.state.borrow_mut();
        state.overlay_hidden = false;
        state.dialog_hidden = false;
        state.scroll_locked = true;
    }

    fn hide_dialog(&self) {
        let mut state = self.state.borrow_mut();
        state.overlay_hidden = true;
        state.dialog_hidden = true;
        state.scroll_locked = false;
    }

    fn show_loading(&self) {
        let mut state = self.state.borrow_mut();
        state.loading_visible = true;
        state.content_visible = false;
        state.loading_shown += 1;
        state.content_message = None;
    }

    fn reveal_content(&self) {
        let mut state = self.state.borrow_mut();
        state.loading_visible = false;
        state.content_visible = true;
    }

    fn set_text(&self, field: TextField, text: &str) {
        self.state.borrow_mut().texts.insert(field, text.to_string());
    }

    fn set_score_band(&self, field: ScoreField, band: ScoreBand) {
        self.state.borrow_mut().bands.insert(field, band);
    }

    fn set_image(&self, src: &str, alt: &str) {
        self.state.borrow_mut().image = Some((src.to_string(), alt.to_string()));
    }

    fn set_body_html(&self, html: &str) {
        self.state.borrow_mut().body_html = Some(html.to_string());
    }

    fn populate_list(&self, field: ListField, items: &[String]) {
        self.state.borrow_mut().lists.insert(field, items.to_vec());
    }

    fn show_content_message(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        state.content_message = Some(html.to_string());
        state.loading_visible = false;
        state.content_visible = true;
    }

    fn show_related(&self, view: &RelatedView, on_select: RelatedSelect) {
        let mut state = self.state.borrow_mut();
        state.related = Some(view.clone());
        state.related_select = Some(on_select);
    }
}

/// Scheduler backed by a `LocalPool`; timers fire on the next poll.
#[derive(Clone)]
pub struct PoolScheduler {
    spawner: LocalSpawner,
}

impl Scheduler for PoolScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool accepts tasks");
    }

    fn delay(&self, _millis: u32) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }
}

pub type TestController = ModalController<FakeSource, RecordingSurface, PoolScheduler>;

pub struct Harness {
    pub pool: LocalPool,
    pub source: FakeSource,
    pub surface: RecordingSurface,
    pub controller: TestController,
}

impl Harness {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let source = FakeSource::default();
        let surface = RecordingSurface::default();
        let scheduler = PoolScheduler {
            spawner: pool.spawner(),
        };
        let controller = ModalController::new(
            source.clone(),
            surface.clone(),
            scheduler,
            300,
            DebugLogger::disabled(Subsystem::Modal),
        );
        Self {
            pool,
            source,
            surface,
            controller,
        }
    }

    /// Open `id`, wait for the primary render, then let background work settle.
    pub fn open(&mut self, id: &str) -> Result<LoadOutcome, FetchError> {
        let pending = self.controller.open(id);
        let outcome = self.pool.run_until(pending);
        self.pool.run_until_stalled();
        outcome
    }

    /// Spawn a load without waiting for it; the result lands in the slot.
    pub fn open_detached(&mut self, id: &str) -> Rc<RefCell<Option<Result<LoadOutcome, FetchError>>>> {
        let slot = Rc::new(RefCell::new(None));
        let pending = self.controller.open(id);
        let sink = Rc::clone(&slot);
        self.pool
            .spawner()
            .spawn_local(async move {
                *sink.borrow_mut() = Some(pending.await);
            })
            .expect("local pool accepts tasks");
        self.pool.run_until_stalled();
        slot
    }
}

pub fn full_payload(id: &str, title: &str) -> DetailPayload {
    let json = format!(
        r#"{{
            "id": "{id}",
            "title": "{title}",
            "developer": "CD Projekt Red",
            "publisher": "CD Projekt",
            "releaseDate": "2015-05-19",
            "metacriticScore": 92,
            "userScore": 9.1,
            "ageRating": "PEGI 18",
            "playtime": "100 hours",
            "price": 39.99,
            "multiplayer": false,
            "imageUrl": "https://example.com/{id}.jpg",
            "detailsHtml": "<p>Details for {title}</p>",
            "description": "Plain description",
            "platforms": ["PC", "PlayStation 5"],
            "genres": ["RPG"],
            "tags": ["Open World", "Story Rich"]
        }}"#
    );
    DetailPayload::from_json(&json)
        .expect("fixture parses")
        .expect("fixture is not null")
}

pub fn related(id: &str, title: &str, rating: Option<f64>) -> RelatedItem {
    RelatedItem::new(id, title, rating)
}
