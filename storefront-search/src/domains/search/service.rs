//! Search service: server search first, client-side filtering as fallback

use parking_lot::Mutex;
use std::sync::Arc;
use storefront_model::{Product, SearchField};
use tokio::time::Instant;

use super::error::SearchResult;
use super::filter::{dedupe_and_truncate, filter_products};
use super::metrics::{LookupMetrics, LookupSource};
use crate::infra::cache::TtlCache;
use crate::infra::services::api::CatalogService;

pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Keys of the catalog-level cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKey {
    AllProducts,
}

/// Cache holding the full product list used by fallback filtering
pub type ProductCache = TtlCache<CatalogKey, Arc<Vec<Product>>>;

/// Result of a single lookup, tagged with where it came from
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub query: String,
    pub results: Vec<Product>,
    pub source: LookupSource,
    pub metrics: LookupMetrics,
}

/// Service for executing lookups
#[derive(Debug)]
pub struct SearchService {
    catalog: Arc<dyn CatalogService>,
    products: Mutex<ProductCache>,
    /// Held across the product-list fetch so overlapping fallbacks share it
    products_fill: tokio::sync::Mutex<()>,
    max_results: usize,
}

impl SearchService {
    /// Create a new search service around a catalog and an owned product cache
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        products: ProductCache,
        max_results: usize,
    ) -> Self {
        Self {
            catalog,
            products: Mutex::new(products),
            products_fill: tokio::sync::Mutex::new(()),
            max_results: max_results.max(1),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Look up `query`. Never fails: a failed fallback yields no results.
    pub async fn lookup(&self, query: &str) -> LookupOutcome {
        let start = Instant::now();
        let trimmed = query.trim();

        let (results, source) = if trimmed.is_empty() {
            (Vec::new(), LookupSource::Skipped)
        } else {
            self.lookup_non_empty(trimmed).await
        };

        let execution_time = start.elapsed();

        log::info!(
            "Lookup completed - Source: {}, Time: {}ms, Results: {}, Query: '{}'",
            source,
            execution_time.as_millis(),
            results.len(),
            trimmed
        );

        LookupOutcome {
            query: query.to_string(),
            metrics: LookupMetrics {
                source,
                query_length: trimmed.len(),
                execution_time,
                result_count: results.len(),
                timestamp: start,
            },
            results,
            source,
        }
    }

    async fn lookup_non_empty(
        &self,
        query: &str,
    ) -> (Vec<Product>, LookupSource) {
        match self.catalog.search(query).await {
            Ok(products) => (
                dedupe_and_truncate(products, self.max_results),
                LookupSource::Server,
            ),
            Err(e) => {
                log::warn!(
                    "Server search failed for query '{}', falling back to client filtering: {}",
                    query,
                    e
                );

                match self.search_fallback(query).await {
                    Ok(results) => (results, LookupSource::Fallback),
                    Err(e) => {
                        log::warn!(
                            "Fallback product fetch failed for query '{}': {}",
                            query,
                            e
                        );
                        (Vec::new(), LookupSource::Unavailable)
                    }
                }
            }
        }
    }

    /// Filter the full product list locally
    pub async fn search_fallback(&self, query: &str) -> SearchResult<Vec<Product>> {
        let products = self.all_products().await?;
        Ok(filter_products(
            &products,
            query,
            &SearchField::FALLBACK,
            self.max_results,
        ))
    }

    /// Full product list, served from cache while fresh
    pub async fn all_products(&self) -> SearchResult<Arc<Vec<Product>>> {
        if let Some(cached) = self.cached_products() {
            log::debug!("Serving {} products from cache", cached.len());
            return Ok(cached);
        }

        let _fill = self.products_fill.lock().await;

        // Filled by whoever held the guard before us
        if let Some(cached) = self.cached_products() {
            return Ok(cached);
        }

        let products = Arc::new(self.catalog.get_all().await?);
        self.products
            .lock()
            .insert(CatalogKey::AllProducts, products.clone());

        Ok(products)
    }

    fn cached_products(&self) -> Option<Arc<Vec<Product>>> {
        self.products.lock().get(&CatalogKey::AllProducts).cloned()
    }

    pub fn invalidate_products(&self) {
        self.products.lock().invalidate(&CatalogKey::AllProducts);
    }
}
