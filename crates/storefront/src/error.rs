//! Unified error handling.
//!
//! Provides a unified `AppError` type mapping store and catalog failures
//! to HTTP responses. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::stores::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No active session where one is required.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The active session may not touch this resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Catalog(CatalogError::Unavailable(_))) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::NotSignedIn => StatusCode::UNAUTHORIZED,
                AuthError::EmailAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidEmail(_) | AuthError::InvalidUsername(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::Catalog(err) => match err {
                CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
                CatalogError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose backend details to clients
        let message = match &self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::EmailAlreadyExists => {
                    "An account with this email already exists".to_string()
                }
                AuthError::NotSignedIn => "Sign in required".to_string(),
                AuthError::InvalidEmail(e) => e.to_string(),
                AuthError::InvalidUsername(e) => e.to_string(),
            },
            Self::Catalog(err) => match err {
                CatalogError::Validation(e) => e.to_string(),
                CatalogError::Unavailable(_) => "External service error".to_string(),
            },
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use ecofinds_core::UsernameError;

    use crate::models::ProductDraftError;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Forbidden("test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailAlreadyExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidUsername(
                UsernameError::TooShort { min: 3 }
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_catalog_error_status_codes() {
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::Validation(
                ProductDraftError::PriceNotPositive
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::Unavailable(
                "down".to_string()
            ))),
            StatusCode::BAD_GATEWAY
        );
    }
}
