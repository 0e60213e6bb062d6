//! Search domain types and state management

use std::time::Duration;
use storefront_model::Product;

use super::metrics::{LookupHistory, LookupSource};
use crate::infra::cache::TtlCache;

/// Upper bound on distinct queries kept in the result cache
const RESULT_CACHE_CAPACITY: usize = 64;

/// Results remembered for a query, with the source that produced them
#[derive(Debug, Clone)]
pub struct CachedResults {
    pub results: Vec<Product>,
    pub source: LookupSource,
}

/// Main search domain state
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Query as displayed in the input, updated on every keystroke
    pub query: String,
    /// Results of the latest applied lookup
    pub results: Vec<Product>,
    /// Whether a dispatched lookup has not settled yet
    pub is_searching: bool,
    /// Highlighted result (keyboard navigation)
    pub selected_index: Option<usize>,
    /// Source of the results currently shown
    pub last_source: Option<LookupSource>,
    /// Quiet period before a lookup is dispatched
    pub debounce_duration: Duration,
    /// Result cache keyed by normalized query
    pub cache: TtlCache<String, CachedResults>,
    /// Rolling lookup metrics
    pub history: LookupHistory,
    debounce_generation: u64,
    latest_seq: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_secs(300))
    }
}

impl SearchState {
    pub fn new(debounce_duration: Duration, result_cache_ttl: Duration) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_searching: false,
            selected_index: None,
            last_source: None,
            debounce_duration,
            cache: TtlCache::with_capacity(
                result_cache_ttl,
                RESULT_CACHE_CAPACITY,
            ),
            history: LookupHistory::new(),
            debounce_generation: 0,
            latest_seq: 0,
        }
    }

    /// Cache key for a query: trimmed and lowercased
    pub fn cache_key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    pub fn debounce_generation(&self) -> u64 {
        self.debounce_generation
    }

    /// Start a new keystroke generation; pending debounced triggers go stale.
    pub fn next_generation(&mut self) -> u64 {
        self.debounce_generation += 1;
        self.debounce_generation
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Tag a new lookup; responses carrying older tags are discarded.
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Whether a response tagged `seq` is still the one to apply
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub fn get_cached_results(&self, query: &str) -> Option<&CachedResults> {
        self.cache.get(&Self::cache_key(query))
    }

    pub fn cache_results(
        &mut self,
        query: &str,
        source: LookupSource,
        results: Vec<Product>,
    ) {
        self.cache
            .insert(Self::cache_key(query), CachedResults { results, source });
    }

    /// Replace shown results with those of the current lookup
    pub fn apply_results(
        &mut self,
        results: Vec<Product>,
        source: Option<LookupSource>,
    ) {
        self.results = results;
        self.last_source = source;
        self.is_searching = false;
        self.selected_index = None;
    }

    /// Drop results and invalidate every pending debounce and in-flight lookup.
    pub fn reset_results(&mut self) {
        self.results.clear();
        self.is_searching = false;
        self.selected_index = None;
        self.last_source = None;
        self.next_generation();
        self.next_seq();
    }

    /// Clear search state
    pub fn clear(&mut self) {
        self.query.clear();
        self.reset_results();
    }

    /// Navigate selection up
    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None | Some(0) => Some(self.results.len() - 1),
            Some(i) => Some(i - 1),
        };
    }

    /// Navigate selection down
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(i) if i >= self.results.len() - 1 => Some(0),
            Some(i) => Some(i + 1),
        };
    }

    /// Get currently selected result
    pub fn get_selected(&self) -> Option<&Product> {
        self.selected_index.and_then(|i| self.results.get(i))
    }
}
