//! # Password Digests
//!
//! Password hashing and verification using a plain SHA-256 digest.
//!
//! The digest is unsalted and single-iteration on purpose: stored demo
//! credentials are plain `sha256(password)` hex strings and this module must
//! produce the same value for the same input every time. A production
//! deployment would need a salted, iterated, memory-hard scheme (argon2 or
//! similar) and a credential migration; do not reuse this module for one.

use sha2::{Digest, Sha256};

/// Hash a password into a lowercase hex SHA-256 digest.
///
/// Deterministic: the same plaintext always yields the same digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
