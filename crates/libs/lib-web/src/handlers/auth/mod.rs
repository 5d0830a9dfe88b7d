//! # Authentication Handlers
//!
//! HTTP handlers for the auth endpoints:
//!
//! - `POST /api/auth/login`: email/password sign-in
//! - `POST /api/auth/demo`: session for the pre-seeded demo account
//! - `POST /api/auth/register`: account creation
//! - `GET /api/auth/me`: public view of the session's user (bearer token)
//!
//! Each handler validates input, consults the [`UserStore`], and on success
//! issues a session token alongside the public user view. All failures are
//! expressed as [`AppError`] values, which carry their own HTTP mapping.

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use lib_auth::{hash_password, issue_token, verify_password, Claims};
use lib_core::{
    dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
    model::store::{NewUser, StoreError},
    AppError, Config, Result, UserStore, DEMO_USER_ID,
};
use lib_utils::required_field;
use std::sync::Arc;
use tracing::{debug, error, info, warn};


/// Login handler. Authenticates an existing user by email and password.
///
/// Unknown email and wrong password produce the same
/// [`AppError::InvalidCredentials`] so a caller cannot tell which check
/// failed.
pub async fn login(
    State(store): State<Arc<UserStore>>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    debug!("[LOGIN] login attempt for {}", req.email);

    let email = required_field(&req.email, "email").map_err(AppError::Validation)?;
    let password = required_field(&req.password, "password").map_err(AppError::Validation)?;

    let user = store.find_by_email(email).await.ok_or_else(|| {
        warn!("[LOGIN] unknown email");
        AppError::InvalidCredentials
    })?;

    if !verify_password(password, &user.password_hash) {
        warn!("[LOGIN] wrong password for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&user.id, &config.jwt_secret, config.session_ttl_seconds)?;

    info!("[LOGIN] authenticated user {}", user.id);
    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// Demo-session handler. Issues a session for the pre-seeded demo account.
///
/// Takes no input; a missing demo seed is an internal fault, never a
/// client error.
pub async fn demo(
    State(store): State<Arc<UserStore>>,
    State(config): State<Config>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let user = store.find_by_id(DEMO_USER_ID).await.ok_or_else(|| {
        error!("[DEMO] demo user missing from store");
        AppError::Internal("demo user missing from store".to_string())
    })?;

    let token = issue_token(&user.id, &config.jwt_secret, config.session_ttl_seconds)?;

    info!("[DEMO] started demo session");
    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// Registration handler. Creates a new user account and signs it in.
pub async fn register(
    State(store): State<Arc<UserStore>>,
    State(config): State<Config>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    debug!("[REGISTER] registration attempt for {}", req.email);

    let name = required_field(&req.name, "name").map_err(AppError::Validation)?;
    let email = required_field(&req.email, "email").map_err(AppError::Validation)?;
    let password = required_field(&req.password, "password").map_err(AppError::Validation)?;

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password),
    };

    let user = match store.insert(new_user).await {
        Ok(user) => user,
        Err(StoreError::AlreadyExists) => {
            warn!("[REGISTER] email already registered");
            return Err(AppError::Conflict(
                "A user already exists with this email".to_string(),
            ));
        }
    };

    let token = issue_token(&user.id, &config.jwt_secret, config.session_ttl_seconds)?;

    info!("[REGISTER] created user {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// Session introspection handler. Resolves the bearer token's subject to
/// its public user view. Requires the session middleware.
pub async fn me(
    State(store): State<Arc<UserStore>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PublicUser>> {
    let user = store.find_by_id(&claims.sub).await.ok_or_else(|| {
        warn!("[ME] session subject {} no longer resolves", claims.sub);
        AppError::Unauthorized
    })?;

    Ok(Json(PublicUser::from(&user)))
}
