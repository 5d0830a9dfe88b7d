//! # Utilities Library
//!
//! Shared helpers for base64url encoding, environment variables, and input validation.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_decode, b64u_decode_to_string, b64u_encode};
pub use envs::{env_or, env_or_parse};
pub use validation::required_field;
