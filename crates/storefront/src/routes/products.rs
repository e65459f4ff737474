//! Product route handlers.
//!
//! The marketplace listing endpoint applies the pure catalog query to
//! whatever the gateway returns; it is recomputed on every request, the
//! same way the original recomputes on every input change.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ecofinds_core::{Category, CategoryFilter, CurrencyCode, Price, ProductId};

use crate::catalog::{CatalogError, filter_products};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Product, ProductDraft};
use crate::state::AppState;

/// Marketplace filter parameters.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Free-text search over title and description.
    pub q: Option<String>,
    /// Category label, or "All Categories".
    pub category: Option<String>,
}

/// Listing creation payload.
#[derive(Debug, Deserialize)]
pub struct CreateProductPayload {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// Marketplace listing response: the filtered products plus the catalog
/// size, for "Showing x of y" displays.
#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Marketplace listing with search and category filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductListView>> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(label) => label
            .parse::<CategoryFilter>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
    };

    let products = state.catalog().products().await?;
    let total = products.len();
    let products = filter_products(products, query.q.as_deref().unwrap_or(""), filter);

    Ok(Json(ProductListView { products, total }))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .product(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Create a listing owned by the active user.
#[instrument(skip(state, user, payload))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(payload): Json<CreateProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    let draft = ProductDraft::new(
        &payload.title,
        &payload.description,
        payload.category,
        Price::new(payload.price, CurrencyCode::USD),
        payload.image_url,
    )
    .map_err(CatalogError::Validation)?;

    let product = state.catalog().create_product(&user, draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Delete one of the active user's listings.
#[instrument(skip(state, user))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .product(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    if product.owner_id != user.id {
        return Err(AppError::Forbidden(
            "only the owner can delete a listing".to_string(),
        ));
    }

    state.catalog().delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
