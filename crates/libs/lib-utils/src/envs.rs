//! # Environment Variables
//!
//! Helpers for reading environment variables with defaults.

use std::env;
use std::str::FromStr;

/// Get an environment variable, falling back to a default when unset.
pub fn env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to a default when unset.
///
/// A set-but-unparseable value is an error rather than a silent fallback.
pub fn env_or_parse<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match env::var(name) {
        Ok(val) => val.parse::<T>().map_err(|_| Error::WrongFormat(name)),
        Err(_) => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
