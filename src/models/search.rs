//! Search term and filters for the recipe listing.

use serde::{Deserialize, Serialize};

/// Diet filter values offered by the front end.
pub const KNOWN_DIETS: &[(&str, &str)] = &[
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("glutenFree", "Gluten-Free"),
    ("dairyFree", "Dairy-Free"),
];

/// Cuisine filter values offered by the front end.
pub const KNOWN_CUISINES: &[(&str, &str)] = &[
    ("italian", "Italian"),
    ("mexican", "Mexican"),
    ("indian", "Indian"),
    ("chinese", "Chinese"),
];

/// Optional, additive search filters.
///
/// Values outside the known lists are passed to the API unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub diet: Option<String>,
    pub cuisine: Option<String>,
}

impl SearchFilters {
    pub fn new(diet: Option<&str>, cuisine: Option<&str>) -> Self {
        Self {
            diet: normalize(diet),
            cuisine: normalize(cuisine),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diet.is_none() && self.cuisine.is_none()
    }
}

/// A full search request: free-text term plus filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text term; empty requests the default listing
    pub term: String,
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, filters: SearchFilters) -> Self {
        Self {
            term: term.into().trim().to_string(),
            filters,
        }
    }

    /// Unfiltered default listing.
    pub fn all() -> Self {
        Self::default()
    }
}

/// Empty or blank filter values mean "unset".
pub fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_unset() {
        let filters = SearchFilters::new(Some(""), Some("  "));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_filters_are_additive() {
        let filters = SearchFilters::new(Some("vegan"), Some("italian"));
        assert_eq!(filters.diet.as_deref(), Some("vegan"));
        assert_eq!(filters.cuisine.as_deref(), Some("italian"));
    }

    #[test]
    fn test_term_is_trimmed() {
        let query = SearchQuery::new("  pasta ", SearchFilters::default());
        assert_eq!(query.term, "pasta");
        assert_eq!(SearchQuery::all().term, "");
    }
}
