//! Search domain messages

use storefront_model::ProductId;

use super::service::LookupOutcome;

/// Search domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    /// Update search query text (one keystroke)
    UpdateQuery(String),
    /// Commit the current query (Enter / search button)
    Submit,
    /// Clear search and results
    ClearSearch,
    /// Open a product from the results
    SelectResult(ProductId),
    /// Commit a recent or trending suggestion
    SelectSuggestion(String),
    /// Navigate selection up
    SelectPrevious,
    /// Navigate selection down
    SelectNext,
    /// Open the highlighted result, or submit when nothing is highlighted
    SelectCurrent,

    // Internal events
    /// Quiet period elapsed for the keystroke of `generation`
    SearchDebounced { generation: u64, query: String },
    /// Lookup tagged `seq` settled
    ResultsReceived { seq: u64, outcome: LookupOutcome },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdateQuery(_) => "UpdateQuery",
            Self::Submit => "Submit",
            Self::ClearSearch => "ClearSearch",
            Self::SelectResult(_) => "SelectResult",
            Self::SelectSuggestion(_) => "SelectSuggestion",
            Self::SelectPrevious => "SelectPrevious",
            Self::SelectNext => "SelectNext",
            Self::SelectCurrent => "SelectCurrent",
            Self::SearchDebounced { .. } => "SearchDebounced",
            Self::ResultsReceived { .. } => "ResultsReceived",
        }
    }
}
