//! Click binding for server-rendered game cards.

use crate::dom;
use crate::modal;
use gamerec_core::DebugLogger;

pub const GAME_CARD_SELECTOR: &str = ".game-card";
pub const GAME_ID_ATTR: &str = "data-game-id";
/// Marks a card whose click handler is attached.
pub const BOUND_ATTR: &str = "data-card-bound";

/// Make every game card matching `selector` open the details dialog.
///
/// Cards that are already bound are skipped. Returns how many cards were
/// bound by this call.
pub fn bind(selector: &str, logger: DebugLogger) -> usize {
    let mut bound = 0;
    for card in dom::query_all(selector) {
        if card.has_attribute(BOUND_ATTR) {
            continue;
        }
        let Some(game_id) = card.get_attribute(GAME_ID_ATTR).filter(|id| !id.is_empty()) else {
            continue;
        };
        let title = card
            .query_selector(".game-title")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_else(|| "Unknown".to_string());
        let listened = dom::listen(&card, "click", move |_| {
            logger.debug(format_args!("Game card clicked: {game_id} ({title})"));
            modal::open_detached(&game_id);
        });
        match listened {
            Ok(()) => {
                let _ = card.set_attribute(BOUND_ATTR, "");
                bound += 1;
            }
            Err(err) => log::error!("Failed to bind game card: {}", dom::js_error_message(&err)),
        }
    }
    bound
}

/// Bind every game card on the page.
pub fn bind_all(logger: DebugLogger) -> usize {
    bind(GAME_CARD_SELECTOR, logger)
}
