//! Cart store.
//!
//! An ordered collection of (product, quantity) entries keyed by product
//! id, belonging to the active session. All operations are total functions
//! over the current state; derived totals are recomputed on every read.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use serde::Serialize;

use ecofinds_core::ProductId;

use crate::models::Product;

/// A single cart line: one product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    /// The product being purchased.
    pub product: Product,
    /// How many units (always >= 1 while the entry exists).
    pub quantity: u32,
}

/// The per-session cart.
///
/// Cheaply cloneable; clones share the same underlying entries.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<Vec<CartEntry>>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations never leave an entry half-updated, so a poisoned lock still
    // guards consistent data; recover the guard instead of failing reads.
    fn read(&self) -> RwLockReadGuard<'_, Vec<CartEntry>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CartEntry>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one unit of `product`.
    ///
    /// If an entry for the product already exists its quantity is
    /// incremented; otherwise a new entry with quantity 1 is appended,
    /// preserving insertion order.
    pub fn add(&self, product: Product) {
        let mut entries = self.write();
        if let Some(entry) = entries.iter_mut().find(|e| e.product.id == product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return;
        }
        entries.push(CartEntry {
            product,
            quantity: 1,
        });
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of 0 removes the entry. Absent ids are a no-op.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: u32) {
        let mut entries = self.write();
        if quantity == 0 {
            entries.retain(|e| e.product.id != *product_id);
            return;
        }
        if let Some(entry) = entries.iter_mut().find(|e| e.product.id == *product_id) {
            entry.quantity = quantity;
        }
    }

    /// Remove the entry for `product_id` if present.
    pub fn remove(&self, product_id: &ProductId) {
        self.write().retain(|e| e.product.id != *product_id);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// A snapshot of the current entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<CartEntry> {
        self.read().clone()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.read().iter().map(|e| e.quantity).sum()
    }

    /// Sum of price × quantity over all entries.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.read()
            .iter()
            .map(|e| e.product.price.line_total(e.quantity))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use ecofinds_core::{Category, Price, UserId};

    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: "A test product for the cart.".to_owned(),
            category: Category::Books,
            price: Price::usd(price),
            image_url: "https://example.com/p.jpg".to_owned(),
            owner_id: UserId::new("9"),
            owner_name: "Test Owner".to_owned(),
            created_at: NaiveDate::default(),
        }
    }

    #[test]
    fn test_repeated_add_increments_single_entry() {
        let cart = CartStore::new();
        for _ in 0..3 {
            cart.add(product("1", 85));
        }

        let entries = cart.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.first().unwrap().quantity, 3);
    }

    #[test]
    fn test_add_two_products_preserves_order() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.add(product("2", 45));
        cart.add(product("1", 85));

        let entries = cart.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().unwrap().product.id, ProductId::new("1"));
        assert_eq!(entries.get(1).unwrap().product.id, ProductId::new("2"));
    }

    #[test]
    fn test_update_quantity_zero_removes_entry() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.update_quantity(&ProductId::new("1"), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.update_quantity(&ProductId::new("404"), 5);

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.update_quantity(&ProductId::new("1"), 4);

        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.remove(&ProductId::new("404"));

        assert_eq!(cart.entries().len(), 1);
    }

    #[test]
    fn test_totals_over_mixed_cart() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.add(product("1", 85));
        cart.add(product("2", 45));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::from(215));
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = CartStore::new();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_clear_resets_totals() {
        let cart = CartStore::new();
        cart.add(product("1", 85));
        cart.clear();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_double_add_price_scenario() {
        // Add product P (price 85) twice: one entry, quantity 2, total 170.
        let cart = CartStore::new();
        cart.add(product("p", 85));
        cart.add(product("p", 85));

        let entries = cart.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.first().unwrap().quantity, 2);
        assert_eq!(cart.total_price(), Decimal::from(170));
    }
}
