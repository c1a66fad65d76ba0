//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP listener configuration
//! - `session` - Session cookie configuration
//! - `verify` - Verification provider configuration
//!
//! Every sub-configuration exposes a `from_env()` constructor. Required
//! variables surface as [`ConfigError::Missing`]; malformed values surface as
//! [`ConfigError::Invalid`].

pub mod environment;
pub mod server;
pub mod session;
pub mod verify;

use std::env;
use std::str::FromStr;

use thiserror::Error;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use session::{SameSitePolicy, SessionConfig, MIN_SESSION_KEY_BYTES};
pub use verify::{TwilioConfig, VerifyProvider, VerifyProviderConfig};

/// Errors raised while loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Read a required variable; empty values count as missing.
pub(crate) fn required(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

pub(crate) fn or_default(var: &'static str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an optional variable, falling back to `default` when unset.
pub(crate) fn parse_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}
