// Collaborator abstractions consumed by the search domain

pub mod api;
pub mod navigation;

pub use api::CatalogService;
pub use navigation::{HistoryNavigator, Navigator};
