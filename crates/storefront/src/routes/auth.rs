//! Authentication route handlers.
//!
//! Thin JSON adapters over the session store; the cart store is cleared
//! here on logout because that responsibility belongs to the caller, not
//! the session store.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Create an account and make it the active session.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<CurrentUser>)> {
    let user = state
        .session()
        .register(&payload.email, &payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(CurrentUser::from(&user))))
}

/// Activate an existing identity.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<CurrentUser>> {
    let user = state
        .session()
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(CurrentUser::from(&user)))
}

/// Clear the active session and the dependent cart.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session().logout();
    state.cart().clear();
    StatusCode::NO_CONTENT
}

/// The current session, if any.
#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Result<Json<CurrentUser>> {
    state
        .session()
        .current_user()
        .map(|user| Json(CurrentUser::from(&user)))
        .ok_or_else(|| AppError::Unauthorized("Sign in required".to_string()))
}
