//! # Session Middleware
//!
//! Validates the `Authorization: Bearer <token>` header and injects the
//! token's [`Claims`] into request extensions for downstream handlers.
//!
//! Every token failure (missing header, malformed token, bad signature,
//! expiry) collapses to a single 401 outcome; the distinction only exists
//! in the server log.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::verify_token;
use lib_core::{AppError, Config};
use tracing::{debug, warn};

/// Require a valid bearer session token.
pub async fn require_session(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] missing Authorization header");
            AppError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Authorization header is not a bearer token");
        AppError::Unauthorized
    })?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] token rejected: {}", e);
        AppError::from(e)
    })?;

    debug!("[AUTH] authenticated session for {}", claims.sub);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
