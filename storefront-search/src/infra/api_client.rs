use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use storefront_model::Product;
use url::Url;

use crate::domains::search::error::{SearchError, SearchResult};
use crate::infra::services::api::CatalogService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the storefront catalog API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> SearchResult<Self> {
        let base_url = normalize_base_url(base_url.into());
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute endpoint URL
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn search_url(&self, query: &str) -> SearchResult<Url> {
        let mut url = Url::parse(&self.build_url("products/search"))
            .map_err(|e| SearchError::Internal(format!("bad search url: {e}")))?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// Execute a request and decode a JSON body
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> SearchResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogService for ApiClient {
    async fn search(&self, query: &str) -> SearchResult<Vec<Product>> {
        let url = self.search_url(query)?;
        debug!("[ApiClient] GET {}", url);
        self.execute_request(self.client.get(url)).await
    }

    async fn get_all(&self) -> SearchResult<Vec<Product>> {
        let url = self.build_url("products");
        debug!("[ApiClient] GET {}", url);
        self.execute_request(self.client.get(url)).await
    }
}

// Many users will provide "localhost:3000", which reqwest rejects.
fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        log::warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw,
            with_scheme
        );
    }
    with_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_scheme_and_loses_trailing_slash() {
        assert_eq!(
            normalize_base_url("localhost:3000/".to_string()),
            "http://localhost:3000"
        );
        assert_eq!(
            normalize_base_url("https://shop.example/api".to_string()),
            "https://shop.example/api"
        );
    }

    #[test]
    fn search_url_encodes_query_parameter() {
        let client = ApiClient::new("https://shop.example/api/").unwrap();

        assert_eq!(
            client.build_url("/products"),
            "https://shop.example/api/products"
        );
        assert_eq!(
            client.search_url("led tv & more").unwrap().as_str(),
            "https://shop.example/api/products/search?q=led+tv+%26+more"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();

        let result = client.search("lamp").await;

        assert!(matches!(result, Err(SearchError::Request(_))));
    }
}
