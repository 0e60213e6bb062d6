//! Infrastructure the search domain plugs into: catalog transport,
//! persistence, navigation, caching and configuration.

pub mod api_client;
pub mod cache;
pub mod config;
pub mod services;
pub mod storage;

pub use api_client::ApiClient;
pub use cache::TtlCache;
pub use config::SearchConfig;
pub use services::{CatalogService, HistoryNavigator, Navigator};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
