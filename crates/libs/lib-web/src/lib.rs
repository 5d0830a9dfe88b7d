//! # Web Library
//!
//! HTTP handlers, middleware, and server setup for the auth service.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{router, start_server, AppState, ServerConfig};
