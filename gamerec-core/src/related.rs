//! Ranking of related games.

use crate::model::RelatedItem;

/// Number of related games shown.
pub const RELATED_LIMIT: usize = 3;
pub const RELATED_HEADING: &str = "You might also like";
pub const NO_RELATED_MESSAGE: &str = "No similar games found";
pub const RELATED_FAILED_MESSAGE: &str = "Could not load related games";

/// State of the related games section.
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedView {
    /// Request in flight; heading and an empty list.
    Pending,
    /// Best-rated related games, already ranked and truncated.
    Ranked(Vec<RelatedItem>),
    Empty,
    Failed,
}

impl RelatedView {
    /// Rank a raw response into the view to display.
    #[must_use]
    pub fn from_response(items: Vec<RelatedItem>) -> Self {
        let ranked = rank_related(items);
        if ranked.is_empty() {
            Self::Empty
        } else {
            Self::Ranked(ranked)
        }
    }

    /// Items on display, empty unless ranked.
    #[must_use]
    pub fn items(&self) -> &[RelatedItem] {
        match self {
            Self::Ranked(items) => items,
            Self::Pending | Self::Empty | Self::Failed => &[],
        }
    }
}

/// Sort by rating, best first, keeping response order for ties, and keep
/// the top [`RELATED_LIMIT`].
#[must_use]
pub fn rank_related(mut items: Vec<RelatedItem>) -> Vec<RelatedItem> {
    items.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
    items.truncate(RELATED_LIMIT);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, rating: Option<f64>) -> RelatedItem {
        RelatedItem::new(id, format!("Game {id}"), rating)
    }

    #[test]
    fn keeps_top_three_by_rating() {
        let ranked = rank_related(vec![
            item("a", Some(85.0)),
            item("b", Some(92.0)),
            item("c", Some(78.0)),
            item("d", Some(90.0)),
            item("e", Some(88.0)),
        ]);
        let ids: Vec<_> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "e"]);
    }

    #[test]
    fn ties_keep_response_order_and_missing_rating_ranks_last() {
        let ranked = rank_related(vec![
            item("unrated", None),
            item("first", Some(7.0)),
            item("second", Some(7.0)),
            item("negative", Some(-1.0)),
        ]);
        let ids: Vec<_> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "unrated"]);
    }

    #[test]
    fn text_ratings_rank_numerically() {
        let items: Vec<RelatedItem> = serde_json::from_str(
            r#"[
                {"id":"a","title":"A","rating":"85"},
                {"id":"b","title":"B","rating":"92"},
                {"id":"c","title":"C","rating":""},
                {"id":"d","title":"D","rating":"9.5"}
            ]"#,
        )
        .unwrap();
        let ranked = rank_related(items);
        let ids: Vec<_> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "d"]);
    }

    #[test]
    fn empty_response_becomes_empty_view() {
        assert_eq!(RelatedView::from_response(Vec::new()), RelatedView::Empty);
        assert!(RelatedView::Failed.items().is_empty());
    }

    #[test]
    fn short_response_is_kept_whole() {
        let view = RelatedView::from_response(vec![item("only", Some(1.0))]);
        assert_eq!(view.items().len(), 1);
    }
}
