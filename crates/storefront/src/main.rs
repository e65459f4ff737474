//! EcoFinds Storefront - Marketplace server.
//!
//! This binary serves the marketplace JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Explicit session and cart stores constructed once per instance
//! - Mock in-memory catalog behind the `CatalogGateway` trait
//! - Durable session snapshot in a local JSON file
//!
//! There is no real backend: "network calls" are simulated with a fixed
//! delay configured via `ECOFINDS_MOCK_LATENCY_MS`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecofinds_storefront::catalog::MockCatalog;
use ecofinds_storefront::config::StorefrontConfig;
use ecofinds_storefront::routes;
use ecofinds_storefront::state::AppState;
use ecofinds_storefront::stores::{CartStore, JsonSnapshotStore, SessionStore};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ecofinds_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the stores: catalog gateway, session (restored from the
    // durable snapshot), and cart
    let latency = config.mock_latency();
    let catalog = Arc::new(MockCatalog::new(latency));
    let snapshots = Arc::new(JsonSnapshotStore::new(config.session_file.clone()));
    let session = SessionStore::restore(snapshots, latency);
    let cart = CartStore::new();

    let addr = config.socket_addr();
    let state = AppState::new(config, catalog, session, cart);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
