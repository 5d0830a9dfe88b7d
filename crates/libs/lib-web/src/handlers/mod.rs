//! # Handlers
//!
//! HTTP request handlers.

pub mod auth;
