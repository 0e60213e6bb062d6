//! Navigation collaborator invoked once a search is committed.

use parking_lot::Mutex;
use std::fmt::Debug;
use storefront_model::ProductId;

pub trait Navigator: Send + Sync + Debug {
    fn go_to(&self, path: &str);
}

/// Path of the listing page for a submitted query
pub fn search_path(query: &str) -> String {
    format!("/products?search={}", urlencoding::encode(query))
}

/// Path of a product detail page
pub fn product_path(id: ProductId) -> String {
    format!("/products/{id}")
}

/// Navigator that records every visited path in order.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    visited: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        self.visited.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_encodes_query() {
        assert_eq!(search_path("led tv"), "/products?search=led%20tv");
        assert_eq!(search_path("a&b"), "/products?search=a%26b");
    }

    #[test]
    fn history_navigator_tracks_order() {
        let navigator = HistoryNavigator::new();
        navigator.go_to("/products/1");
        navigator.go_to(&product_path(ProductId(2)));

        assert_eq!(navigator.visited(), vec!["/products/1", "/products/2"]);
        assert_eq!(navigator.current().as_deref(), Some("/products/2"));
    }
}
