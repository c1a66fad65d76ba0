//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{or_default, parse_or, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Peer addresses allowed to assert `X-Forwarded-Proto`
    #[serde(default)]
    pub trusted_proxies: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            workers: 0,
            trusted_proxies: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load from `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` and the
    /// comma-separated `TRUSTED_PROXIES`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: or_default("SERVER_HOST", &defaults.host),
            port: parse_or("SERVER_PORT", defaults.port)?,
            workers: parse_or("SERVER_WORKERS", defaults.workers)?,
            trusted_proxies: or_default("TRUSTED_PROXIES", "")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
