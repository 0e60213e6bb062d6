//! Catalog data model definitions shared across storefront crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod product;
pub mod search_field;

pub use error::{ModelError, Result as ModelResult};
pub use ids::ProductId;
pub use product::{Category, Product};
pub use search_field::SearchField;
