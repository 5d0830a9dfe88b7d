//! # Model Layer
//!
//! Application data model and its store.

pub mod store;
