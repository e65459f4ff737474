//! Product categories.
//!
//! The category set is fixed: listings pick exactly one, and the
//! marketplace filter adds a distinguished "All Categories" choice on top.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Label used by the filter UI for the match-everything choice.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Error returned when a category label is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// One of the fixed product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Electronics,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    #[serde(rename = "Sports & Outdoors")]
    SportsAndOutdoors,
    #[serde(rename = "Toys & Games")]
    ToysAndGames,
    Furniture,
    #[serde(rename = "Art & Crafts")]
    ArtAndCrafts,
}

impl Category {
    /// All categories, in the order the marketplace lists them.
    pub const ALL: [Self; 8] = [
        Self::Clothing,
        Self::Electronics,
        Self::Books,
        Self::HomeAndGarden,
        Self::SportsAndOutdoors,
        Self::ToysAndGames,
        Self::Furniture,
        Self::ArtAndCrafts,
    ];

    /// The human-readable label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Books => "Books",
            Self::HomeAndGarden => "Home & Garden",
            Self::SportsAndOutdoors => "Sports & Outdoors",
            Self::ToysAndGames => "Toys & Games",
            Self::Furniture => "Furniture",
            Self::ArtAndCrafts => "Art & Crafts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

/// A category selector for the marketplace filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == wanted,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_CATEGORIES_LABEL}"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_LABEL {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!("Vehicles".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::HomeAndGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");

        let parsed: Category = serde_json::from_str("\"Sports & Outdoors\"").unwrap();
        assert_eq!(parsed, Category::SportsAndOutdoors);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_filter_only_matches_one() {
        let filter = CategoryFilter::Only(Category::Books);
        assert!(filter.matches(Category::Books));
        assert!(!filter.matches(Category::Clothing));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(
            ALL_CATEGORIES_LABEL.parse::<CategoryFilter>().unwrap(),
            CategoryFilter::All
        );
        assert_eq!(
            "Furniture".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Furniture)
        );
    }
}
