use std::fmt;

/// Product attributes that participate in text matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchField {
    Title,
    Description,
    Category,
    Company,
    Tags,
}

impl SearchField {
    /// Every field the client-side fallback filter inspects.
    pub const FALLBACK: [SearchField; 5] = [
        SearchField::Title,
        SearchField::Description,
        SearchField::Category,
        SearchField::Company,
        SearchField::Tags,
    ];

    pub fn api_name(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Description => "description",
            SearchField::Category => "category",
            SearchField::Company => "company",
            SearchField::Tags => "tags",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
