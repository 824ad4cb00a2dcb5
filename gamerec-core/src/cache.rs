//! Session-lifetime cache of detail payloads.

use crate::model::DetailPayload;
use std::collections::HashMap;

/// Detail payloads keyed by the id they were requested under.
///
/// Unbounded and never evicted; lives as long as the page.
#[derive(Debug, Clone, Default)]
pub struct DetailCache {
    entries: HashMap<String, DetailPayload>,
}

impl DetailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DetailPayload> {
        self.entries.get(id)
    }

    /// Store `payload` under `id`, replacing any earlier entry.
    pub fn put(&mut self, id: impl Into<String>, payload: DetailPayload) {
        self.entries.insert(id.into(), payload);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
