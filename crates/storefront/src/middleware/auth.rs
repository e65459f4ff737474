//! Authentication extractor.
//!
//! Provides an extractor for requiring an active session in route
//! handlers. The session store tolerates reads with no session; routes
//! that mutate on behalf of a user use this to gate instead.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

/// Extractor that requires an active session.
///
/// Rejects with 401 when nobody is signed in.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
pub struct RequireAuth(pub User);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .session()
            .current_user()
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("Sign in required".to_string()))
    }
}
