//! Account route handlers (dashboard data).

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, Product};
use crate::state::AppState;

/// Username update payload.
#[derive(Debug, Deserialize)]
pub struct UpdateUsernamePayload {
    pub username: String,
}

/// Change the active user's display name.
#[instrument(skip(state, payload))]
pub async fn update_username(
    State(state): State<AppState>,
    Json(payload): Json<UpdateUsernamePayload>,
) -> Result<Json<CurrentUser>> {
    let user = state.session().update_username(&payload.username).await?;
    Ok(Json(CurrentUser::from(&user)))
}

/// The active user's own listings.
#[instrument(skip(state, user))]
pub async fn listings(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Product>>> {
    let listings = state.catalog().products_by_owner(&user.id).await?;
    Ok(Json(listings))
}

/// The active user's purchase history.
#[instrument(skip(state, _user))]
pub async fn purchases(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<Product>>> {
    let history = state.catalog().purchase_history().await?;
    Ok(Json(history))
}
