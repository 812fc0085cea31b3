//! Product category type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown [`Category`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// Classification of a product.
///
/// This is a closed set: the backing store persists categories by name, and
/// every stored value must round-trip through [`Category::as_str`] and
/// [`Category::from_str`](std::str::FromStr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Cloths,
        Self::Food,
        Self::Housewares,
        Self::Automotive,
        Self::Tools,
    ];

    /// The canonical name used for storage and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cloths => "CLOTHS",
            Self::Food => "FOOD",
            Self::Housewares => "HOUSEWARES",
            Self::Automotive => "AUTOMOTIVE",
            Self::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNKNOWN" => Ok(Self::Unknown),
            "CLOTHS" => Ok(Self::Cloths),
            "FOOD" => Ok(Self::Food),
            "HOUSEWARES" => Ok(Self::Housewares),
            "AUTOMOTIVE" => Ok(Self::Automotive),
            "TOOLS" => Ok(Self::Tools),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_round_trip_all_categories() {
        for category in Category::ALL {
            let parsed = Category::from_str(category.as_str()).expect("canonical name parses");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = Category::from_str("GROCERIES").expect_err("not a known category");
        assert_eq!(err, CategoryParseError("GROCERIES".to_owned()));
    }

    #[test]
    fn test_display_matches_storage_name() {
        assert_eq!(Category::Cloths.to_string(), "CLOTHS");
    }

    #[test]
    fn test_serde_uses_storage_name() {
        let json = serde_json::to_string(&Category::Housewares).expect("serialize category");
        assert_eq!(json, "\"HOUSEWARES\"");
        let back: Category = serde_json::from_str(&json).expect("deserialize category");
        assert_eq!(back, Category::Housewares);
    }
}
