//! Recently submitted queries, most recent first
//!
//! The list is capped and holds no duplicates. It is stored as a JSON array
//! of strings under [`RECENT_SEARCHES_KEY`] in the injected key-value store.

use std::fmt;
use std::sync::Arc;

use super::error::SearchResult;
use crate::infra::storage::KeyValueStore;

pub const RECENT_SEARCHES_KEY: &str = "recentSearches";
pub const DEFAULT_MAX_RECENT: usize = 5;

pub struct RecentSearches {
    entries: Vec<String>,
    capacity: usize,
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for RecentSearches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentSearches")
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl RecentSearches {
    /// Load persisted entries. Unreadable or malformed data starts empty.
    pub fn load(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        let mut recent = Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            store,
        };

        let stored = match recent.store.get(RECENT_SEARCHES_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Failed to read recent searches: {}", e);
                None
            }
        };

        if let Some(raw) = stored {
            match serde_json::from_str::<Vec<String>>(&raw) {
                // Oldest first so each push lands in front of older entries
                Ok(saved) => {
                    for query in saved.iter().rev() {
                        recent.push(query);
                    }
                }
                Err(e) => {
                    log::warn!("Discarding malformed recent searches: {}", e)
                }
            }
        }

        recent
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Move `query` to the front, dropping an older copy and the overflow.
    ///
    /// Returns `false` for blank queries, which are never recorded.
    pub fn push(&mut self, query: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }

        self.entries.retain(|existing| existing != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    /// Push and persist. The in-memory list is updated even if the write fails.
    pub fn record(&mut self, query: &str) -> SearchResult<()> {
        if self.push(query) {
            self.persist()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> SearchResult<()> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> SearchResult<()> {
        let encoded = serde_json::to_string(&self.entries)?;
        self.store.set(RECENT_SEARCHES_KEY, &encoded)?;
        Ok(())
    }
}
