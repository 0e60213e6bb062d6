//! Domain modules for the storefront search client

pub mod search;
