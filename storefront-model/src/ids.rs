use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Strongly typed catalog identifier for products
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        ProductId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl FromStr for ProductId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(ProductId)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId(7));
    }

    #[test]
    fn rejects_empty_and_non_numeric_ids() {
        assert!(matches!(
            "".parse::<ProductId>(),
            Err(ModelError::InvalidId(_))
        ));
        assert!(matches!(
            "abc".parse::<ProductId>(),
            Err(ModelError::InvalidId(_))
        ));
        assert!("-3".parse::<ProductId>().is_err());
    }

    #[test]
    fn invalid_id_message_quotes_input() {
        let parsed: crate::ModelResult<ProductId> = "12a".parse();

        assert_eq!(
            parsed.unwrap_err().to_string(),
            r#"invalid product id: "12a""#
        );
    }
}
