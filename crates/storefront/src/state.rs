//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogGateway;
use crate::config::StorefrontConfig;
use crate::stores::{CartStore, SessionStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and carries the stores as
/// explicit objects constructed once per application instance.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn CatalogGateway>,
    session: SessionStore,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Arc<dyn CatalogGateway>,
        session: SessionStore,
        cart: CartStore,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                session,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog gateway.
    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CatalogGateway> {
        &self.inner.catalog
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
