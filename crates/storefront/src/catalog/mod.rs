//! Product catalog access.
//!
//! The catalog sits behind the [`CatalogGateway`] trait so a real backend
//! can later satisfy the same contract without touching the stores or the
//! HTTP surface. The only implementation today is [`MockCatalog`], an
//! in-memory catalog seeded with fixed listings whose calls go through a
//! simulated network delay.

mod mock;
pub mod query;
pub(crate) mod seed;

pub use mock::MockCatalog;
pub use query::filter_products;

use async_trait::async_trait;
use thiserror::Error;

use ecofinds_core::{ProductId, UserId};

use crate::models::{Product, ProductDraft, ProductDraftError, User};
use crate::stores::CartEntry;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Listing input failed validation.
    #[error(transparent)]
    Validation(#[from] ProductDraftError),

    /// The backend could not be reached.
    ///
    /// The mock catalog never returns this; the variant exists for real
    /// backends implementing the same contract.
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Gateway to the product catalog and purchase history.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// The full catalog, in stable listing order.
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// A single product by id.
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Create a listing owned by `owner` from a validated draft.
    async fn create_product(
        &self,
        owner: &User,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError>;

    /// Delete a listing. Returns whether anything was removed.
    async fn delete_product(&self, id: &ProductId) -> Result<bool, CatalogError>;

    /// All listings owned by `owner_id`, in catalog order.
    async fn products_by_owner(&self, owner_id: &UserId) -> Result<Vec<Product>, CatalogError>;

    /// Past purchases, oldest first.
    async fn purchase_history(&self) -> Result<Vec<Product>, CatalogError>;

    /// Record a completed checkout in the purchase history.
    async fn record_purchase(&self, entries: &[CartEntry]) -> Result<(), CatalogError>;
}
