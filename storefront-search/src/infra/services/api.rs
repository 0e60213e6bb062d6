//! Catalog service trait
//!
//! Abstracts the storefront REST endpoints the search pipeline consumes so
//! the pipeline can run against the HTTP client or an in-process stub.

use async_trait::async_trait;
use std::fmt::Debug;
use storefront_model::Product;

use crate::domains::search::error::SearchResult;

/// Product catalog endpoints used by search
#[async_trait]
pub trait CatalogService: Send + Sync + Debug {
    /// Server-side product search. May fail when the endpoint is missing or
    /// the network is down; callers fall back to [`CatalogService::get_all`].
    async fn search(&self, query: &str) -> SearchResult<Vec<Product>>;

    /// Fetch the full product list
    async fn get_all(&self) -> SearchResult<Vec<Product>>;
}
