//! Application configuration
//!
//! Assembles the per-concern configuration structs from `pv_shared` into
//! the one value `main` needs to start the server.

use pv_shared::config::{
    ConfigError, Environment, LoggingConfig, ServerConfig, SessionConfig, VerifyProviderConfig,
};

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub verify: VerifyProviderConfig,
}

impl Config {
    /// Load every section from the process environment.
    ///
    /// `.env` is not read here; `main` loads it first with `dotenvy`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env(environment)?,
            session: SessionConfig::from_env(environment)?,
            verify: VerifyProviderConfig::from_env()?,
        })
    }
}
