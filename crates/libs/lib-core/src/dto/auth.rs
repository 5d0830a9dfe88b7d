//! # Authentication DTOs
//!
//! Request and response bodies for the auth endpoints.
//!
//! ## Wire format
//!
//! All bodies are JSON. Success responses are `{ "token": ..., "user": ... }`,
//! error responses `{ "error": ..., "code": ... }`.
//!
//! ```text
//! POST /api/auth/login
//! { "email": "demo@canadianinsights.ca", "password": "northstar-demo" }
//!
//! 200 OK
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": "demo-user", "name": "Taylor Nguyen",
//!             "email": "demo@canadianinsights.ca" }
//! }
//! ```

use crate::model::store::User;
use serde::{Deserialize, Serialize};

/// `POST /api/auth/login` request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The subset of a user record safe to return to a caller.
///
/// Built fresh for each response; never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Successful authentication response: a bearer token plus the public view
/// of the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Standard error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
