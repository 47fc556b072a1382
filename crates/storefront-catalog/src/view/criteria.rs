//! Filter criteria for the listing page.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Category and free-text search criteria.
///
/// `None` and the empty string count as "not specified"; anything else,
/// whitespace included, is matched as given. Both checks are
/// case-insensitive, and when both are set a product must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Tag the product must carry.
    pub category: Option<String>,
    /// Substring the product name must contain.
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category criterion.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the search criterion.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The active category, if any.
    pub fn category(&self) -> Option<&str> {
        active(&self.category)
    }

    /// The active search text, if any.
    pub fn search(&self) -> Option<&str> {
        active(&self.search)
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.category().is_none() && self.search().is_none()
    }

    /// Check whether a product satisfies every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category() {
            if !product.has_tag(category) {
                return false;
            }
        }
        if let Some(search) = self.search() {
            if !product.name_contains(search) {
                return false;
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn lamp() -> Product {
        Product::new("lamp", "Desk Lamp", Money::new(4999, Currency::USD))
            .with_tags(["Home", "Lighting"])
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&lamp()));
    }

    #[test]
    fn test_empty_strings_are_inactive() {
        let criteria = FilterCriteria::new().with_category("").with_search("");
        assert!(criteria.is_empty());
        assert!(criteria.matches(&lamp()));
    }

    #[test]
    fn test_whitespace_is_matched_literally() {
        let mug = Product::new("mug", "Mug", Money::new(1299, Currency::USD)).with_tags(["Home"]);

        let space = FilterCriteria::new().with_search(" ");
        assert!(!space.is_empty());
        assert!(space.matches(&lamp()));
        assert!(!space.matches(&mug));

        assert!(!FilterCriteria::new().with_search("lamp ").matches(&lamp()));
        assert!(!FilterCriteria::new().with_category(" home").matches(&lamp()));
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert!(FilterCriteria::new().with_category("home").matches(&lamp()));
        assert!(!FilterCriteria::new().with_category("garden").matches(&lamp()));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(FilterCriteria::new().with_search("LAMP").matches(&lamp()));
        assert!(FilterCriteria::new().with_search("k l").matches(&lamp()));
        assert!(!FilterCriteria::new().with_search("zzz").matches(&lamp()));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let both = FilterCriteria::new().with_category("home").with_search("desk");
        assert!(both.matches(&lamp()));

        let wrong_search = FilterCriteria::new().with_category("home").with_search("chair");
        assert!(!wrong_search.matches(&lamp()));
    }
}
