//! Session cookie configuration

use std::fmt;

use super::{or_default, parse_or, required, ConfigError, Environment};

/// Minimum length of the cookie signing key in bytes
pub const MIN_SESSION_KEY_BYTES: usize = 32;

/// Default cookie lifetime: eight hours
const DEFAULT_MAX_AGE_SECS: i64 = 3600 * 8;

/// SameSite attribute for the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

impl std::str::FromStr for SameSitePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(SameSitePolicy::Strict),
            "lax" => Ok(SameSitePolicy::Lax),
            "none" => Ok(SameSitePolicy::None),
            other => Err(format!("unknown SameSite policy '{}'", other)),
        }
    }
}

/// Session cookie configuration
#[derive(Clone)]
pub struct SessionConfig {
    /// Cookie name holding the session
    pub cookie_name: String,

    /// Secret used to sign the cookie
    pub key: Vec<u8>,

    /// Session key under which flash messages are stored
    pub flash_key: String,

    /// Cookie Domain attribute
    pub domain: String,

    /// Cookie Path attribute
    pub path: String,

    /// Cookie Max-Age in seconds
    pub max_age_secs: i64,

    /// Cookie HttpOnly flag
    pub http_only: bool,

    /// Cookie Secure flag (HTTPS only)
    pub secure: bool,

    /// Cookie SameSite attribute
    pub same_site: SameSitePolicy,
}

impl SessionConfig {
    /// Build a configuration with the default cookie attributes.
    pub fn new(
        cookie_name: impl Into<String>,
        key: impl Into<Vec<u8>>,
        flash_key: impl Into<String>,
    ) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            key: key.into(),
            flash_key: flash_key.into(),
            domain: String::from("localhost"),
            path: String::from("/"),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            http_only: true,
            secure: false,
            same_site: SameSitePolicy::Lax,
        }
    }

    /// Load from `SESSION_*` and `FLASH_KEY`.
    ///
    /// Production defaults to secure cookies.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let key = required("SESSION_KEY")?.into_bytes();
        if key.len() < MIN_SESSION_KEY_BYTES {
            return Err(ConfigError::Invalid {
                var: "SESSION_KEY",
                reason: format!(
                    "must be at least {} bytes, got {}",
                    MIN_SESSION_KEY_BYTES,
                    key.len()
                ),
            });
        }

        let max_age_secs = parse_or("SESSION_MAX_AGE", DEFAULT_MAX_AGE_SECS)?;
        if max_age_secs <= 0 {
            return Err(ConfigError::Invalid {
                var: "SESSION_MAX_AGE",
                reason: String::from("must be a positive number of seconds"),
            });
        }

        Ok(Self {
            cookie_name: required("SESSION_NAME")?,
            key,
            flash_key: required("FLASH_KEY")?,
            domain: or_default("SESSION_DOMAIN", "localhost"),
            path: or_default("SESSION_PATH", "/"),
            max_age_secs,
            http_only: parse_or("SESSION_HTTP_ONLY", true)?,
            secure: parse_or("SESSION_SECURE", environment.is_production())?,
            same_site: parse_or("SESSION_SAME_SITE", SameSitePolicy::Lax)?,
        })
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("cookie_name", &self.cookie_name)
            .field("key", &"[redacted]")
            .field("flash_key", &self.flash_key)
            .field("domain", &self.domain)
            .field("path", &self.path)
            .field("max_age_secs", &self.max_age_secs)
            .field("http_only", &self.http_only)
            .field("secure", &self.secure)
            .field("same_site", &self.same_site)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn loads_required_values_with_defaults() {
        temp_env::with_vars(
            [
                ("SESSION_KEY", Some(KEY)),
                ("SESSION_NAME", Some("pv_session")),
                ("FLASH_KEY", Some("flash")),
                ("SESSION_DOMAIN", None),
                ("SESSION_PATH", None),
                ("SESSION_MAX_AGE", None),
                ("SESSION_HTTP_ONLY", None),
                ("SESSION_SECURE", None),
                ("SESSION_SAME_SITE", None),
            ],
            || {
                let config = SessionConfig::from_env(Environment::Development).unwrap();
                assert_eq!(config.cookie_name, "pv_session");
                assert_eq!(config.flash_key, "flash");
                assert_eq!(config.domain, "localhost");
                assert_eq!(config.path, "/");
                assert_eq!(config.max_age_secs, 28800);
                assert!(config.http_only);
                assert!(!config.secure);
                assert_eq!(config.same_site, SameSitePolicy::Lax);

                let prod = SessionConfig::from_env(Environment::Production).unwrap();
                assert!(prod.secure);
            },
        );
    }

    #[test]
    fn rejects_short_signing_key() {
        temp_env::with_vars(
            [
                ("SESSION_KEY", Some("too-short")),
                ("SESSION_NAME", Some("pv_session")),
                ("FLASH_KEY", Some("flash")),
            ],
            || {
                let err = SessionConfig::from_env(Environment::Development).unwrap_err();
                assert!(matches!(err, ConfigError::Invalid { var: "SESSION_KEY", .. }));
            },
        );
    }

    #[test]
    fn missing_flash_key_is_reported() {
        temp_env::with_vars(
            [
                ("SESSION_KEY", Some(KEY)),
                ("SESSION_NAME", Some("pv_session")),
                ("FLASH_KEY", None),
            ],
            || {
                assert_eq!(
                    SessionConfig::from_env(Environment::Development).unwrap_err(),
                    ConfigError::Missing("FLASH_KEY")
                );
            },
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = SessionConfig::new("pv_session", KEY, "flash");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains(KEY));
        assert!(rendered.contains("[redacted]"));
    }
}
