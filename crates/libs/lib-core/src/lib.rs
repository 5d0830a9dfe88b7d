//! # Core Library
//!
//! Configuration, error taxonomy, the credential store, and DTOs.

pub mod config;
pub mod dto;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{User, UserStore, DEMO_USER_ID};
