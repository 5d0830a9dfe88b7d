//! # Credential Store
//!
//! In-memory user store. The only shared mutable state in the service; all
//! access goes through [`UserStore`], never a process-wide variable.

mod users;

pub use users::{NewUser, StoreError, User, UserStore, DEMO_USER_ID};
