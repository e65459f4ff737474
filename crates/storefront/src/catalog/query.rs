//! Marketplace filter/search.
//!
//! A stateless pure function recomputed on every input change; at this
//! data volume no incremental or indexed search is needed.

use ecofinds_core::CategoryFilter;

use crate::models::Product;

/// Filter `products` by a free-text query and a category selector.
///
/// A product passes when the query is a case-insensitive substring of its
/// title or description AND its category passes `filter`. The empty query
/// matches everything. Original order is preserved.
#[must_use]
pub fn filter_products(
    products: Vec<Product>,
    query: &str,
    filter: CategoryFilter,
) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|p| matches_query(p, &needle) && filter.matches(p.category))
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecofinds_core::Category;

    use crate::catalog::seed;

    use super::*;

    #[test]
    fn test_empty_query_all_categories_returns_full_catalog() {
        let products = seed::products();
        let filtered = filter_products(products.clone(), "", CategoryFilter::All);
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let filtered = filter_products(seed::products(), "zeppelin", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filtered = filter_products(seed::products(), "MACBOOK", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().title, "MacBook Air 2019");
    }

    #[test]
    fn test_query_matches_description_too() {
        // "carrying strap" only appears in the yoga mat description.
        let filtered = filter_products(seed::products(), "carrying strap", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().title, "Yoga Mat Set");
    }

    #[test]
    fn test_category_filter_with_empty_query() {
        let filtered = filter_products(
            seed::products(),
            "",
            CategoryFilter::Only(Category::Clothing),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().title, "Vintage Leather Jacket");
    }

    #[test]
    fn test_query_and_category_must_both_match() {
        // "sustainable" appears in several descriptions, but only one of
        // those products is furniture.
        let filtered = filter_products(
            seed::products(),
            "sustainable",
            CategoryFilter::Only(Category::Furniture),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().title, "Wooden Coffee Table");
    }

    #[test]
    fn test_category_with_no_products_returns_empty() {
        let filtered = filter_products(
            seed::products(),
            "",
            CategoryFilter::Only(Category::ArtAndCrafts),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        // "perfect" appears in listings 1, 3, and 6; catalog order holds.
        let filtered = filter_products(seed::products(), "perfect", CategoryFilter::All);
        let titles: Vec<_> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Vintage Leather Jacket",
                "Collection of Classic Books",
                "Wooden Coffee Table",
            ]
        );
    }
}
