//! Cart route handlers.
//!
//! Reads tolerate a missing session and answer empty/zero; mutations are
//! gated on an active session. Checkout is the one simulated "network"
//! operation here: it records the purchase through the catalog gateway
//! (which applies the mock delay) and then clears the cart.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ecofinds_core::{CurrencyCode, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::stores::{CartEntry, CartStore};

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub owner_name: String,
    pub category: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_amount(Decimal::ZERO, CurrencyCode::default()),
            item_count: 0,
        }
    }

    /// Render the current store contents.
    #[must_use]
    pub fn from_store(cart: &CartStore) -> Self {
        let entries = cart.entries();
        let currency = entries
            .first()
            .map_or_else(CurrencyCode::default, |e| e.product.price.currency_code);

        Self {
            items: entries.iter().map(CartItemView::from).collect(),
            subtotal: format_amount(cart.total_price(), currency),
            item_count: cart.total_items(),
        }
    }
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let price = entry.product.price;
        Self {
            id: entry.product.id.clone(),
            title: entry.product.title.clone(),
            owner_name: entry.product.owner_name.clone(),
            category: entry.product.category.to_string(),
            image_url: entry.product.image_url.clone(),
            quantity: entry.quantity,
            price: price.display(),
            line_price: format_amount(price.line_total(entry.quantity), price.currency_code),
        }
    }
}

/// Format a decimal amount as a price string.
fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    format!("{}{amount:.2}", currency.symbol())
}

/// Cart count badge data.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Order confirmation data.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub total_items: u32,
    pub total_price: String,
}

/// Cart entry reference payload.
#[derive(Debug, Deserialize)]
pub struct CartItemPayload {
    pub product_id: String,
}

/// Quantity update payload.
#[derive(Debug, Deserialize)]
pub struct UpdateCartPayload {
    pub product_id: String,
    pub quantity: u32,
}

/// Display the cart. Empty when nobody is signed in.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    if state.session().is_signed_in() {
        Json(CartView::from_store(state.cart()))
    } else {
        Json(CartView::empty())
    }
}

/// The cart count badge. Zero when nobody is signed in.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCountView> {
    let count = if state.session().is_signed_in() {
        state.cart().total_items()
    } else {
        0
    };
    Json(CartCountView { count })
}

/// Add one unit of a product to the cart.
#[instrument(skip(state, _user))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(payload): Json<CartItemPayload>,
) -> Result<Json<CartCountView>> {
    let id = ProductId::new(payload.product_id);
    let product = state
        .catalog()
        .product(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    state.cart().add(product);
    Ok(Json(CartCountView {
        count: state.cart().total_items(),
    }))
}

/// Set an entry's quantity (0 removes it).
#[instrument(skip(state, _user))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(payload): Json<UpdateCartPayload>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(payload.product_id);
    state.cart().update_quantity(&id, payload.quantity);
    Ok(Json(CartView::from_store(state.cart())))
}

/// Remove an entry from the cart.
#[instrument(skip(state, _user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(payload): Json<CartItemPayload>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(payload.product_id);
    state.cart().remove(&id);
    Ok(Json(CartView::from_store(state.cart())))
}

/// Empty the cart.
#[instrument(skip(state, _user))]
pub async fn clear(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<CartView>> {
    state.cart().clear();
    Ok(Json(CartView::empty()))
}

/// Place the order: record the purchase, then clear the cart.
#[instrument(skip(state, _user))]
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<(StatusCode, Json<OrderView>)> {
    let entries = state.cart().entries();
    if entries.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let currency = entries
        .first()
        .map_or_else(CurrencyCode::default, |e| e.product.price.currency_code);
    let order = OrderView {
        total_items: state.cart().total_items(),
        total_price: format_amount(state.cart().total_price(), currency),
    };

    state.catalog().record_purchase(&entries).await?;
    state.cart().clear();

    Ok((StatusCode::CREATED, Json(order)))
}
