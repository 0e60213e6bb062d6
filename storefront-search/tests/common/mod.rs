//! Shared fixtures for storefront search integration tests
//!
//! [`StubCatalog`] stands in for the catalog API: it serves a fixed product
//! list, can be told to fail either endpoint, and can delay individual
//! queries so tests can reorder responses under a paused clock.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use storefront_model::Product;
use storefront_search::domains::search::{
    Message, ProductCache, SearchDomain, SearchError, SearchResult,
    SearchService,
};
use storefront_search::infra::{
    CatalogService, HistoryNavigator, KeyValueStore, MemoryStore, SearchConfig,
};

pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Granularity at which [`Harness::settle_for`] applies posted messages
const STEP: Duration = Duration::from_millis(10);

/// Eight products; "led" matches five of them through different fields.
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new(1u64, "LED Desk Lamp")
            .with_category("Lighting")
            .with_company("Lumina")
            .with_price(39.9),
        Product::new(2u64, "Smart Bulb")
            .with_description("Dimmable LED bulb with app control")
            .with_category("Lighting"),
        Product::new(3u64, "Office Chair")
            .with_category("Furniture")
            .with_tags(["ergonomic"]),
        Product::new(4u64, "Wireless Earbuds")
            .with_category("Audio")
            .with_company("Sonic"),
        Product::new(5u64, "Strip Lights")
            .with_category("Decor")
            .with_tags(["LED", "RGB"]),
        Product::new(6u64, "Ceiling Panel").with_category("LED Panels"),
        Product::new(7u64, "Desk Fan")
            .with_category("Appliances")
            .with_company("Ledford Appliances"),
        Product::new(8u64, "Coffee Maker").with_category("Kitchen"),
    ]
}

/// `count` products whose titles all contain "widget"
pub fn widgets(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|i| Product::new(i, format!("Widget {i}")))
        .collect()
}

pub fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id.as_u64()).collect()
}

/// In-memory catalog with failure switches and call accounting
#[derive(Debug, Default)]
pub struct StubCatalog {
    products: Vec<Product>,
    search_fails: AtomicBool,
    get_all_fails: AtomicBool,
    duplicate_hits: AtomicBool,
    delays: Mutex<HashMap<String, Duration>>,
    get_all_delay: Mutex<Option<Duration>>,
    search_calls: AtomicUsize,
    get_all_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn fail_search(&self, fail: bool) {
        self.search_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fail_get_all(&self, fail: bool) {
        self.get_all_fails.store(fail, Ordering::SeqCst);
    }

    /// Make the server answer every hit twice
    pub fn duplicate_hits(&self, duplicate: bool) {
        self.duplicate_hits.store(duplicate, Ordering::SeqCst);
    }

    /// Delay the server response for `query`
    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().insert(query.to_string(), delay);
    }

    /// Delay every full product list response
    pub fn delay_get_all(&self, delay: Duration) {
        *self.get_all_delay.lock() = Some(delay);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn search(&self, query: &str) -> SearchResult<Vec<Product>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.to_string());

        let delay = self.delays.lock().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.search_fails.load(Ordering::SeqCst) {
            return Err(SearchError::Status {
                status: 503,
                body: "search unavailable".to_string(),
            });
        }

        let needle = query.to_lowercase();
        let hits = self
            .products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .cloned();

        if self.duplicate_hits.load(Ordering::SeqCst) {
            Ok(hits.flat_map(|p| [p.clone(), p]).collect())
        } else {
            Ok(hits.collect())
        }
    }

    async fn get_all(&self) -> SearchResult<Vec<Product>> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.get_all_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.get_all_fails.load(Ordering::SeqCst) {
            return Err(SearchError::Status {
                status: 500,
                body: "catalog unavailable".to_string(),
            });
        }

        Ok(self.products.clone())
    }
}

/// A domain wired to stubs, plus handles to inspect them
pub struct Harness {
    pub domain: SearchDomain,
    pub receiver: tokio::sync::mpsc::UnboundedReceiver<Message>,
    pub catalog: Arc<StubCatalog>,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<HistoryNavigator>,
}

impl Harness {
    pub fn new(catalog: StubCatalog) -> Self {
        Self::with_store(catalog, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(catalog: StubCatalog, store: Arc<MemoryStore>) -> Self {
        let catalog = Arc::new(catalog);
        let navigator = Arc::new(HistoryNavigator::new());
        let (domain, receiver) = SearchDomain::from_config(
            &SearchConfig::default(),
            catalog.clone(),
            store.clone() as Arc<dyn KeyValueStore>,
            navigator.clone(),
        );

        Self {
            domain,
            receiver,
            catalog,
            store,
            navigator,
        }
    }

    pub fn send(&mut self, message: Message) {
        self.domain.update(message);
    }

    /// Type `text` one character at a time with `gap` between keystrokes
    pub async fn type_text(&mut self, text: &str, gap: Duration) {
        let mut typed = String::new();
        for ch in text.chars() {
            typed.push(ch);
            self.send(Message::UpdateQuery(typed.clone()));
            tokio::time::sleep(gap).await;
            self.drain();
        }
    }

    /// Apply every message already queued, without waiting
    pub fn drain(&mut self) -> Vec<&'static str> {
        let mut applied = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            applied.push(message.as_str());
            self.domain.update(message);
        }
        applied
    }

    /// Let timers and lookups run for `duration`, applying what they post
    pub async fn settle_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            tokio::time::sleep(STEP).await;
            self.drain();
            if tokio::time::Instant::now() >= deadline {
                break;
            }
        }
        // Lookups spawned by the last drain
        tokio::time::sleep(STEP).await;
        self.drain();
    }
}

pub fn service(catalog: Arc<StubCatalog>) -> SearchService {
    SearchService::new(catalog, ProductCache::new(Duration::from_secs(300)), 8)
}
