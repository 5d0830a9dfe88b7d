//! # Middleware
//!
//! Axum middleware for session validation.

pub mod mw_auth;

pub use mw_auth::require_session;
