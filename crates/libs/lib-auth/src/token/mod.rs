//! # Session Tokens
//!
//! Issuance and verification of signed, self-contained session tokens.
//!
//! A token is three URL-safe unpadded base64 segments joined by `.`:
//! a fixed `{"alg":"HS256","typ":"JWT"}` header, a claims payload carrying
//! the subject and expiry, and an HMAC-SHA256 signature computed over
//! `<header>.<payload>` with the process-wide signing secret. Tokens are
//! never stored server-side; validity is decided entirely at verification
//! time from the signature and the embedded expiry.

use hmac::{Hmac, Mac};
use lib_utils::{b64u_decode, b64u_encode};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header, identical for every issued token.
#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token failure modes.
///
/// `Malformed`, `BadSignature` and `Expired` are verification outcomes;
/// `Signing` covers issue-side faults and never comes out of
/// [`verify_token`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is structurally malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issue a signed session token for `user_id`, expiring `ttl_seconds` from now.
pub fn issue_token(user_id: &str, secret: &str, ttl_seconds: i64) -> Result<String, TokenError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now_epoch_seconds() + ttl_seconds,
    };

    let header_seg = b64u_encode(
        serde_json::to_vec(&HEADER).map_err(|e| TokenError::Signing(e.to_string()))?,
    );
    let payload_seg = b64u_encode(
        serde_json::to_vec(&claims).map_err(|e| TokenError::Signing(e.to_string()))?,
    );

    let message = format!("{header_seg}.{payload_seg}");
    let signature_seg = b64u_encode(sign(message.as_bytes(), secret)?);

    Ok(format!("{message}.{signature_seg}"))
}

/// Verify a session token and return its claims.
///
/// Checks run in order: structure (exactly three decodable segments),
/// signature (constant-time comparison against a recomputed MAC), payload
/// shape, then expiry. A token rejected for structure or signature stays
/// rejected forever; an expired token was valid until its `exp` passed.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let (header_seg, payload_seg, signature_seg) = match segments[..] {
        [header, payload, signature] => (header, payload, signature),
        _ => return Err(TokenError::Malformed),
    };

    // Every segment must be valid base64url before anything is trusted.
    b64u_decode(header_seg).map_err(|_| TokenError::Malformed)?;
    let payload_bytes = b64u_decode(payload_seg).map_err(|_| TokenError::Malformed)?;
    let signature = b64u_decode(signature_seg).map_err(|_| TokenError::Malformed)?;

    let message = format!("{header_seg}.{payload_seg}");
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| TokenError::BadSignature)?;
    mac.update(message.as_bytes());
    // verify_slice compares in constant time.
    mac.verify_slice(&signature)
        .map_err(|_| TokenError::BadSignature)?;

    let claims: Claims =
        serde_json::from_slice(&payload_bytes).map_err(|_| TokenError::Malformed)?;

    if now_epoch_seconds() >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

fn sign(message: &[u8], secret: &str) -> Result<Vec<u8>, TokenError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| TokenError::Signing(e.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn now_epoch_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
