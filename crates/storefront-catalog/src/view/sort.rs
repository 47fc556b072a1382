//! Sort keys for the listing page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort options for the derived view.
///
/// Only the price keys reorder anything. The data has no popularity or
/// timestamp fields, so `Popularity` and `Newest` keep the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Popularity,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl SortKey {
    /// All keys, in the order the sort menu shows them.
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
    ];

    /// Stable token used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popular" => Some(SortKey::Popularity),
            "price-asc" | "price_asc" | "price-low" => Some(SortKey::PriceAsc),
            "price-desc" | "price_desc" | "price-high" => Some(SortKey::PriceDesc),
            "newest" | "new" => Some(SortKey::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Most Popular",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest",
        }
    }

    /// Whether this key changes the input order at all.
    pub fn reorders(&self) -> bool {
        matches!(self, SortKey::PriceAsc | SortKey::PriceDesc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_token(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_token(" Price-Low "), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::from_token("rating"), None);
    }

    #[test]
    fn test_default_is_popularity() {
        assert_eq!(SortKey::default(), SortKey::Popularity);
        assert!(!SortKey::Popularity.reorders());
        assert!(SortKey::PriceDesc.reorders());
    }

    #[test]
    fn test_serde_tokens() {
        assert_eq!(serde_json::to_string(&SortKey::PriceAsc).unwrap(), r#""price-asc""#);
    }
}
