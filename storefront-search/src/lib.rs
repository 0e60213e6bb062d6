//! Storefront search library
//!
//! The search bar pipeline used by the `storefront-search` binary in
//! `src/main.rs`: debounced lookups against the catalog API, client-side
//! fallback filtering, recent and trending suggestions.
//!
//! Notes
//! - [`domains::search::SearchDomain`] owns all pipeline state and is driven
//!   by [`domains::search::Message`]s.
//! - Collaborators (catalog, storage, navigation) live in [`infra`] behind
//!   traits so tests and embedders can swap them.

pub mod domains;
pub mod infra;
