//! # Centralized Error Handling
//!
//! The application-wide error type [`AppError`] used across the auth
//! operations, following the `thiserror` pattern.
//!
//! Variants map to caller-visible HTTP outcomes:
//!
//! - [`Validation`](AppError::Validation) → 400 Bad Request
//! - [`InvalidCredentials`](AppError::InvalidCredentials) → 401 Unauthorized
//! - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized (token failures, collapsed)
//! - [`Conflict`](AppError::Conflict) → 409 Conflict
//! - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! Internal detail never reaches the caller: `Internal` carries context for
//! the server log only, and `user_message()` substitutes a generic body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lib_auth::TokenError;
use serde_json::json;
use thiserror::Error;

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type for the auth operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown email or wrong password. Deliberately carries no detail so the
    /// two cases are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, tampered, or expired. The internal
    /// token taxonomy is collapsed to this single outcome for callers.
    #[error("Unauthorized")]
    Unauthorized,

    /// Duplicate registration for an email already in the store.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected fault in the crypto or store layer.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message. Internal faults get a generic body so no
    /// implementation detail leaks outward.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::Unauthorized => "Invalid or expired session".to_string(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Unauthorized => "Unauthorized",
            AppError::Conflict(_) => "Conflict",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

/// Token failures collapse to `Unauthorized` for callers; an issue-side
/// signing fault is an internal error.
impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed | TokenError::BadSignature | TokenError::Expired => {
                AppError::Unauthorized
            }
            TokenError::Signing(msg) => AppError::Internal(format!("token signing: {}", msg)),
        }
    }
}
