use thiserror::Error;

use crate::infra::storage::StorageError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Catalog responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Storage error resulting in lost search state: {0}")]
    Storage(#[from] StorageError),
    #[error("Search pipeline error: {0}")]
    Internal(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
