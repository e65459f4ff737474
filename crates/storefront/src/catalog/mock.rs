//! In-memory mock catalog.
//!
//! Stands in for a real backend: state lives in memory, seeded from
//! [`super::seed`], and every call suspends for the configured mock
//! latency before resolving.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use ecofinds_core::{ProductId, UserId};

use crate::latency::MockLatency;
use crate::models::{Product, ProductDraft, User};
use crate::stores::CartEntry;

use super::seed::{self, FALLBACK_IMAGE_URL};
use super::{CatalogError, CatalogGateway};

struct CatalogState {
    products: Vec<Product>,
    purchases: Vec<Product>,
}

/// The in-memory catalog implementation.
#[derive(Clone)]
pub struct MockCatalog {
    inner: Arc<RwLock<CatalogState>>,
    latency: MockLatency,
}

impl MockCatalog {
    /// Create a catalog seeded with the fixed listings and purchase
    /// history.
    #[must_use]
    pub fn new(latency: MockLatency) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogState {
                products: seed::products(),
                purchases: seed::purchase_history(),
            })),
            latency,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogGateway for MockCatalog {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        self.latency.simulate().await;
        Ok(self.read().products.clone())
    }

    async fn product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        self.latency.simulate().await;
        Ok(self.read().products.iter().find(|p| p.id == *id).cloned())
    }

    async fn create_product(
        &self,
        owner: &User,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        self.latency.simulate().await;

        let (title, description, category, price, image_url) =
            draft.into_parts(FALLBACK_IMAGE_URL);
        let product = Product {
            id: ProductId::random(),
            title,
            description,
            category,
            price,
            image_url,
            owner_id: owner.id.clone(),
            owner_name: owner.username.to_string(),
            created_at: Utc::now().date_naive(),
        };

        self.write().products.push(product.clone());
        tracing::info!(product = %product.id, owner = %owner.id, "Created listing");
        Ok(product)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<bool, CatalogError> {
        self.latency.simulate().await;

        let mut state = self.write();
        let before = state.products.len();
        state.products.retain(|p| p.id != *id);
        let deleted = state.products.len() < before;
        if deleted {
            tracing::info!(product = %id, "Deleted listing");
        }
        Ok(deleted)
    }

    async fn products_by_owner(&self, owner_id: &UserId) -> Result<Vec<Product>, CatalogError> {
        self.latency.simulate().await;
        Ok(self
            .read()
            .products
            .iter()
            .filter(|p| p.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    async fn purchase_history(&self) -> Result<Vec<Product>, CatalogError> {
        self.latency.simulate().await;
        Ok(self.read().purchases.clone())
    }

    async fn record_purchase(&self, entries: &[CartEntry]) -> Result<(), CatalogError> {
        self.latency.simulate().await;

        let mut state = self.write();
        for entry in entries {
            state.purchases.push(entry.product.clone());
        }
        tracing::info!(items = entries.len(), "Recorded purchase");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use ecofinds_core::{Category, Email, Price, Username};

    use crate::stores::CartStore;

    use super::*;

    fn catalog() -> MockCatalog {
        MockCatalog::new(MockLatency::none())
    }

    fn seller() -> User {
        User {
            id: UserId::new("42"),
            email: Email::parse("seller@x.com").unwrap(),
            username: Username::parse("seller").unwrap(),
            created_at: Utc::now(),
        }
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft::new(
            title,
            "A well-loved item looking for a second home.",
            Category::Books,
            Price::usd(10),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_seeded_catalog() {
        let catalog = catalog();
        let products = catalog.products().await.unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products.first().unwrap().title, "Vintage Leather Jacket");

        let history = catalog.purchase_history().await.unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let catalog = catalog();
        let product = catalog.product(&ProductId::new("2")).await.unwrap();
        assert_eq!(product.unwrap().title, "MacBook Air 2019");

        let missing = catalog.product(&ProductId::new("404")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_appends_listing_with_fresh_id() {
        let catalog = catalog();
        let owner = seller();

        let created = catalog
            .create_product(&owner, draft("Recycled Notebook"))
            .await
            .unwrap();
        assert_eq!(created.owner_id, owner.id);
        assert_eq!(created.owner_name, "seller");
        assert_eq!(created.image_url, FALLBACK_IMAGE_URL);

        let products = catalog.products().await.unwrap();
        assert_eq!(products.len(), 7);
        assert_eq!(products.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let catalog = catalog();
        let id = ProductId::new("1");

        assert!(catalog.delete_product(&id).await.unwrap());
        assert!(catalog.product(&id).await.unwrap().is_none());
        assert_eq!(catalog.products().await.unwrap().len(), 5);

        // Second delete finds nothing.
        assert!(!catalog.delete_product(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_products_by_owner() {
        let catalog = catalog();
        let owner = seller();
        catalog
            .create_product(&owner, draft("First Listing"))
            .await
            .unwrap();
        catalog
            .create_product(&owner, draft("Second Listing"))
            .await
            .unwrap();

        let listings = catalog.products_by_owner(&owner.id).await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings.first().unwrap().title, "First Listing");

        let none = catalog.products_by_owner(&UserId::new("404")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_record_purchase_appends_history() {
        let catalog = catalog();
        let cart = CartStore::new();
        let product = catalog
            .product(&ProductId::new("1"))
            .await
            .unwrap()
            .unwrap();
        cart.add(product.clone());
        cart.add(product);

        catalog.record_purchase(&cart.entries()).await.unwrap();

        let history = catalog.purchase_history().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().unwrap().title, "Vintage Leather Jacket");
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_wait_for_mock_latency() {
        let catalog = MockCatalog::new(MockLatency::from_millis(1500));
        let before = tokio::time::Instant::now();
        catalog.products().await.unwrap();
        assert_eq!(
            before.elapsed(),
            std::time::Duration::from_millis(1500)
        );
    }
}
