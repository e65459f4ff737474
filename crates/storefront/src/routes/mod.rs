//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (in main)
//!
//! # Auth
//! POST /auth/register          - Create account, activate session
//! POST /auth/login             - Activate session
//! POST /auth/logout            - Clear session and cart
//! GET  /auth/me                - Current session
//!
//! # Account (requires auth)
//! POST /account/username       - Change display name
//! GET  /account/listings       - Own listings
//! GET  /account/purchases      - Purchase history
//!
//! # Products
//! GET  /products               - Catalog with ?q= and ?category= filters
//! GET  /products/{id}          - Product detail
//! POST /products               - Create listing (requires auth)
//! DELETE /products/{id}        - Delete own listing (requires auth)
//!
//! # Cart
//! GET  /cart                   - Cart contents (empty with no session)
//! GET  /cart/count             - Item count badge
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set an entry's quantity (0 removes)
//! POST /cart/remove            - Remove an entry
//! POST /cart/clear             - Empty the cart
//! POST /cart/checkout          - Place the order, clear the cart
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/username", post(account::update_username))
        .route("/listings", get(account::listings))
        .route("/purchases", get(account::purchases))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show).delete(products::delete))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}
