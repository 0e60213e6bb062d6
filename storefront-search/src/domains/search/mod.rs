//! Search domain - handles the search bar pipeline
//!
//! Keystrokes are debounced, then looked up on the server with a local
//! fallback. Lookups run as tokio tasks that post [`Message`]s back to the
//! domain over an unbounded channel; [`SearchDomain::update`] is the only
//! place state changes.

pub mod error;
pub mod filter;
pub mod messages;
pub mod metrics;
pub mod recent;
pub mod service;
pub mod trending;
pub mod types;
pub mod update;

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::infra::config::SearchConfig;
use crate::infra::services::api::CatalogService;
use crate::infra::services::navigation::Navigator;
use crate::infra::storage::KeyValueStore;

pub use self::error::{SearchError, SearchResult};
pub use self::messages::Message;
pub use self::metrics::{LookupHistory, LookupMetrics, LookupSource};
pub use self::recent::RecentSearches;
pub use self::service::{LookupOutcome, ProductCache, SearchService};
pub use self::trending::{Suggestions, TRENDING_SEARCHES};
pub use self::types::SearchState;

/// Search domain state container
#[derive(Debug)]
pub struct SearchDomain {
    /// Search state
    pub state: SearchState,
    /// Search service for executing lookups
    pub service: Arc<SearchService>,
    recent: RecentSearches,
    navigator: Arc<dyn Navigator>,
    sender: UnboundedSender<Message>,
}

impl SearchDomain {
    /// Create a domain and the receiver its spawned tasks report to.
    pub fn new(
        state: SearchState,
        service: Arc<SearchService>,
        recent: RecentSearches,
        navigator: Arc<dyn Navigator>,
    ) -> (Self, UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                state,
                service,
                recent,
                navigator,
                sender,
            },
            receiver,
        )
    }

    pub fn from_config(
        config: &SearchConfig,
        catalog: Arc<dyn CatalogService>,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> (Self, UnboundedReceiver<Message>) {
        let service = SearchService::new(
            catalog,
            ProductCache::new(config.product_cache_ttl()),
            config.max_results,
        );

        Self::new(
            SearchState::new(config.debounce(), config.result_cache_ttl()),
            Arc::new(service),
            RecentSearches::load(store, config.max_recent),
            navigator,
        )
    }

    /// Sender for feeding user actions into the domain
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.sender.clone()
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// Forget every recent search, in memory and in storage
    pub fn clear_recent(&mut self) -> SearchResult<()> {
        self.recent.clear()
    }

    /// Recent and trending terms for an empty search bar
    pub fn suggestions(&self) -> Suggestions {
        Suggestions {
            recent: self.recent.entries().to_vec(),
            trending: TRENDING_SEARCHES,
        }
    }

    pub fn update(&mut self, message: Message) {
        update::update(self, message);
    }

    /// Wait for the next message from `receiver` and apply it.
    ///
    /// Returns the message name, or `None` once every sender is gone.
    pub async fn next_message(
        &mut self,
        receiver: &mut UnboundedReceiver<Message>,
    ) -> Option<&'static str> {
        let message = receiver.recv().await?;
        let name = message.as_str();
        self.update(message);
        Some(name)
    }
}
