//! Seed data for the mock catalog.
//!
//! Fixed listings and purchase history used as the data source for
//! browsing and filtering. Image URLs point at a fixed pool of stock
//! photos; listings created without an image fall back to
//! [`FALLBACK_IMAGE_URL`].

use chrono::NaiveDate;

use ecofinds_core::{Category, Price, ProductId, UserId};

use crate::models::Product;

/// Image assigned to listings created without one.
pub(crate) const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=500&h=500&fit=crop";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    price: i64,
    image: &str,
    owner_id: &str,
    owner_name: &str,
    created_at: NaiveDate,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        price: Price::usd(price),
        image_url: format!("https://images.unsplash.com/{image}?w=500&h=500&fit=crop"),
        owner_id: UserId::new(owner_id),
        owner_name: owner_name.to_owned(),
        created_at,
    }
}

/// The seeded marketplace listings, in catalog order.
pub(crate) fn products() -> Vec<Product> {
    vec![
        listing(
            "1",
            "Vintage Leather Jacket",
            "Beautiful vintage leather jacket in excellent condition. Perfect for eco-conscious fashion lovers.",
            Category::Clothing,
            85,
            "photo-1551028719-00167b16eac5",
            "2",
            "Sarah Johnson",
            date(2024, 1, 15),
        ),
        listing(
            "2",
            "MacBook Air 2019",
            "Gently used MacBook Air in great condition. Includes charger and original box.",
            Category::Electronics,
            750,
            "photo-1496181133206-80ce9b88a853",
            "3",
            "Mike Chen",
            date(2024, 1, 14),
        ),
        listing(
            "3",
            "Collection of Classic Books",
            "Set of 20 classic literature books. Perfect for book lovers and sustainable reading.",
            Category::Books,
            45,
            "photo-1481627834876-b7833e8f5570",
            "4",
            "Emma Davis",
            date(2024, 1, 13),
        ),
        listing(
            "4",
            "Handmade Ceramic Planters",
            "Set of 3 beautiful handmade ceramic planters. Great for your sustainable garden.",
            Category::HomeAndGarden,
            35,
            "photo-1485955900006-10f4d324d411",
            "5",
            "Alex Green",
            date(2024, 1, 12),
        ),
        listing(
            "5",
            "Yoga Mat Set",
            "Eco-friendly yoga mat with carrying strap and blocks. Barely used.",
            Category::SportsAndOutdoors,
            28,
            "photo-1506629905607-92902d253ec0",
            "6",
            "Lisa Park",
            date(2024, 1, 11),
        ),
        listing(
            "6",
            "Wooden Coffee Table",
            "Solid wood coffee table with natural finish. Perfect for sustainable living.",
            Category::Furniture,
            120,
            "photo-1586023492125-27b2c045efd7",
            "7",
            "David Kim",
            date(2024, 1, 10),
        ),
    ]
}

/// The seeded purchase history shown on the dashboard.
pub(crate) fn purchase_history() -> Vec<Product> {
    vec![
        listing(
            "101",
            "Organic Cotton T-Shirts",
            "Pack of 3 organic cotton t-shirts in various colors.",
            Category::Clothing,
            32,
            "photo-1521572163474-6864f9cf17ab",
            "8",
            "Tom Wilson",
            date(2024, 1, 8),
        ),
        listing(
            "102",
            "Recycled Notebook Set",
            "Set of 5 notebooks made from recycled paper.",
            Category::Books,
            18,
            "photo-1544716278-ca5e3f4abd8c",
            "9",
            "Anna Taylor",
            date(2024, 1, 5),
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_products_have_unique_ids() {
        let products = products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_prices_are_positive() {
        for product in products().iter().chain(purchase_history().iter()) {
            assert!(product.price.is_positive(), "{} has no price", product.title);
        }
    }

    #[test]
    fn test_seed_order_is_newest_first() {
        let products = products();
        let dates: Vec<_> = products.iter().map(|p| p.created_at).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
