//! # Data Transfer Objects (DTOs)
//!
//! Request and response structures exchanged over the REST API.

pub mod auth;

pub use auth::*;
