//! Fixed suggestions shown under an empty search bar

pub const TRENDING_SEARCHES: &[&str] = &[
    "Wireless Earbuds",
    "LED Strip Lights",
    "Running Shoes",
    "Smart Watch",
    "Coffee Maker",
    "Gaming Mouse",
];

/// Suggestion lists shown while the query is empty
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    pub recent: Vec<String>,
    pub trending: &'static [&'static str],
}
