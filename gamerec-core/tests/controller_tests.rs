mod support;

use gamerec_core::related::{NO_RELATED_MESSAGE, RelatedView};
use gamerec_core::render::MISSING_PAYLOAD_HTML;
use gamerec_core::{DetailPayload, FetchError, LoadOutcome, TextField};
use support::{Harness, full_payload, related};

#[test]
fn open_shows_dialog_before_any_request() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));

    let pending = harness.controller.open("witcher");
    {
        let state = harness.surface.state.borrow();
        assert!(!state.overlay_hidden);
        assert!(!state.dialog_hidden);
        assert!(state.scroll_locked);
        assert!(state.loading_visible);
        assert!(!state.content_visible);
    }
    assert!(harness.source.detail_calls().is_empty());

    let outcome = harness.pool.run_until(pending).unwrap();
    assert!(matches!(outcome, LoadOutcome::Rendered(ref p) if p.id == "witcher"));
    assert_eq!(harness.source.detail_calls(), ["witcher"]);
}

#[test]
fn close_hides_dialog_and_releases_scroll() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness.open("witcher").unwrap();

    harness.controller.close();
    let state = harness.surface.state.borrow();
    assert!(state.overlay_hidden);
    assert!(state.dialog_hidden);
    assert!(!state.scroll_locked);
}

#[test]
fn second_open_is_served_from_cache_but_refetches_related() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));

    harness.open("witcher").unwrap();
    harness.controller.close();
    let outcome = harness.open("witcher").unwrap();

    assert!(matches!(outcome, LoadOutcome::Rendered(_)));
    assert_eq!(harness.source.detail_calls(), ["witcher"]);
    assert_eq!(harness.source.related_calls(), ["witcher", "witcher"]);
    assert!(harness.controller.is_cached("witcher"));
    assert_eq!(harness.controller.cached_count(), 1);
}

#[test]
fn related_games_are_ranked_and_truncated() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness.source.set_related(
        "witcher",
        Ok(vec![
            related("a", "Rated 85", Some(85.0)),
            related("b", "Rated 92", Some(92.0)),
            related("c", "Rated 78", Some(78.0)),
            related("d", "Rated 90", Some(90.0)),
            related("e", "Rated 88", Some(88.0)),
        ]),
    );

    harness.open("witcher").unwrap();

    assert_eq!(
        harness.surface.related_titles(),
        ["Rated 92", "Rated 90", "Rated 88"]
    );
}

#[test]
fn empty_related_response_shows_message_state() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness.source.set_related("witcher", Ok(Vec::new()));

    harness.open("witcher").unwrap();

    assert_eq!(harness.surface.related(), Some(RelatedView::Empty));
    assert!(harness.surface.related_titles().is_empty());
    assert_eq!(NO_RELATED_MESSAGE, "No similar games found");
}

#[test]
fn related_failure_does_not_fail_the_open() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness
        .source
        .set_related("witcher", Err(FetchError::Remote { status: 500 }));

    let outcome = harness.open("witcher");

    assert!(matches!(outcome, Ok(LoadOutcome::Rendered(_))));
    assert_eq!(harness.surface.related(), Some(RelatedView::Failed));
    assert_eq!(
        harness.surface.text(TextField::Title).as_deref(),
        Some("The Witcher 3")
    );
}

#[test]
fn detail_failure_rejects_and_shows_error_text() {
    let mut harness = Harness::new();
    harness
        .source
        .set_detail_result("broken", Err(FetchError::Remote { status: 503 }));

    let outcome = harness.open("broken");

    assert_eq!(outcome, Err(FetchError::Remote { status: 503 }));
    let message = harness.surface.state.borrow().content_message.clone().unwrap();
    assert!(message.contains("Error loading game details: Error: 503"));
    assert!(!harness.controller.is_cached("broken"));
    assert!(harness.source.related_calls().is_empty());
}

#[test]
fn transport_failure_message_is_embedded() {
    let mut harness = Harness::new();
    harness.source.set_detail_result(
        "offline",
        Err(FetchError::Transport("Failed to fetch".into())),
    );

    let err = harness.open("offline").unwrap_err();

    assert_eq!(err.to_string(), "Network error: Failed to fetch");
    let message = harness.surface.state.borrow().content_message.clone().unwrap();
    assert!(message.contains("Failed to fetch"));
}

#[test]
fn null_payload_paints_placeholder_without_caching() {
    let mut harness = Harness::new();
    harness.source.set_detail_result("ghost", Ok(None));

    let outcome = harness.open("ghost").unwrap();

    assert_eq!(outcome, LoadOutcome::MissingPayload);
    assert_eq!(
        harness.surface.state.borrow().content_message.as_deref(),
        Some(MISSING_PAYLOAD_HTML)
    );
    assert!(!harness.controller.is_cached("ghost"));
    assert!(harness.source.related_calls().is_empty());
}

#[test]
fn content_is_revealed_after_render() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));

    harness.open("witcher").unwrap();

    let state = harness.surface.state.borrow();
    assert!(state.content_visible);
    assert!(!state.loading_visible);
}

#[test]
fn superseded_load_does_not_overwrite_newer_view() {
    let mut harness = Harness::new();
    let release_slow = harness.source.gate("slow");
    harness.source.add_detail(full_payload("fast", "Fast Game"));
    harness.source.set_related("slow", Ok(vec![related("x", "Slow Related", Some(1.0))]));
    harness.source.set_related("fast", Ok(vec![related("y", "Fast Related", Some(1.0))]));

    let slow_result = harness.open_detached("slow");
    assert!(slow_result.borrow().is_none());

    harness.open("fast").unwrap();
    release_slow
        .send(Ok(Some(full_payload("slow", "Slow Game"))))
        .unwrap();
    harness.pool.run_until_stalled();

    assert_eq!(
        slow_result.borrow().clone(),
        Some(Ok(LoadOutcome::Superseded))
    );
    assert_eq!(
        harness.surface.text(TextField::Title).as_deref(),
        Some("Fast Game")
    );
    assert_eq!(harness.surface.related_titles(), ["Fast Related"]);
    assert!(harness.controller.is_cached("slow"));
}

#[test]
fn stale_failure_does_not_replace_newer_content() {
    let mut harness = Harness::new();
    let release_slow = harness.source.gate("slow");
    harness.source.add_detail(full_payload("fast", "Fast Game"));

    let slow_result = harness.open_detached("slow");
    harness.open("fast").unwrap();
    release_slow
        .send(Err(FetchError::Remote { status: 500 }))
        .unwrap();
    harness.pool.run_until_stalled();

    assert_eq!(
        slow_result.borrow().clone(),
        Some(Err(FetchError::Remote { status: 500 }))
    );
    assert!(harness.surface.state.borrow().content_message.is_none());
}

#[test]
fn clicking_a_related_game_loads_it_in_place() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness.source.add_detail(DetailPayload::new("gwent").with_title("Gwent"));
    harness
        .source
        .set_related("witcher", Ok(vec![related("gwent", "Gwent", Some(7.5))]));

    harness.open("witcher").unwrap();
    let select = harness
        .surface
        .state
        .borrow()
        .related_select
        .clone()
        .unwrap();
    select(String::from("gwent"));
    assert!(harness.surface.state.borrow().loading_visible);
    harness.pool.run_until_stalled();

    let state = harness.surface.state.borrow();
    assert_eq!(state.loading_shown, 2);
    assert!(!state.dialog_hidden);
    assert_eq!(state.texts.get(&TextField::Title).map(String::as_str), Some("Gwent"));
    drop(state);
    assert_eq!(harness.source.detail_calls(), ["witcher", "gwent"]);
    assert_eq!(harness.source.related_calls(), ["witcher", "gwent"]);
}

#[test]
fn reset_forgets_cached_details() {
    let mut harness = Harness::new();
    harness.source.add_detail(full_payload("witcher", "The Witcher 3"));
    harness.open("witcher").unwrap();

    harness.controller.reset();
    harness.open("witcher").unwrap();

    assert_eq!(harness.source.detail_calls(), ["witcher", "witcher"]);
}
