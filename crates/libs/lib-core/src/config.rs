//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! so a misconfigured process fails fast.
//!
//! | Variable              | Default                         | Meaning                         |
//! |-----------------------|---------------------------------|---------------------------------|
//! | `JWT_SECRET`          | built-in demo secret            | HMAC key for session tokens     |
//! | `SESSION_TTL_SECONDS` | `7200` (two hours)              | lifetime of every issued token  |

use lib_utils::{env_or, env_or_parse};

/// Signing secret used when `JWT_SECRET` is not set. Fine for local demos,
/// meaningless for anything exposed to a network.
const DEMO_JWT_SECRET: &str = "canadian-insights-demo-secret";

const DEFAULT_SESSION_TTL_SECONDS: i64 = 60 * 60 * 2;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Secret key for session token signing and verification.
    ///
    /// Process-wide and fixed for the process lifetime; no rotation or
    /// key versioning is supported.
    pub jwt_secret: String,

    /// Lifetime applied uniformly to every issued session token.
    pub session_ttl_seconds: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env_or("JWT_SECRET", DEMO_JWT_SECRET);
        if jwt_secret == DEMO_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set; using the built-in demo secret");
        }

        let session_ttl_seconds = env_or_parse("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECONDS)
            .map_err(|e| format!("SESSION_TTL_SECONDS must be a valid number: {}", e))?;

        Ok(Self {
            jwt_secret,
            session_ttl_seconds,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }

        if self.session_ttl_seconds < 1 {
            return Err("SESSION_TTL_SECONDS must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        let config = Config {
            jwt_secret: "secret".to_string(),
            session_ttl_seconds: 0,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let config = Config {
            jwt_secret: String::new(),
            session_ttl_seconds: 7200,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = Config {
            jwt_secret: DEMO_JWT_SECRET.to_string(),
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        };

        assert!(config.validate().is_ok());
    }
}
