//! Verification provider configuration

use std::fmt;

use super::{or_default, parse_or, required, ConfigError};

const DEFAULT_TWILIO_BASE_URL: &str = "https://verify.twilio.com";
const DEFAULT_MOCK_CODE: &str = "123456";

/// Which verification backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyProvider {
    Twilio,
    Mock,
}

impl std::str::FromStr for VerifyProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(VerifyProvider::Twilio),
            "mock" => Ok(VerifyProvider::Mock),
            other => Err(format!("unknown verification provider '{}'", other)),
        }
    }
}

/// Twilio Verify credentials and transport settings
#[derive(Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify service SID the codes are issued under
    pub service_sid: String,
    /// API root, overridable for tests
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account_sid: required("TWILIO_ACCOUNT_SID")?,
            auth_token: required("TWILIO_AUTH_TOKEN")?,
            service_sid: required("TWILIO_VERIFICATION_SID")?,
            base_url: or_default("TWILIO_VERIFY_BASE_URL", DEFAULT_TWILIO_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: parse_or("TWILIO_REQUEST_TIMEOUT_SECS", 30)?,
        })
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[redacted]")
            .field("service_sid", &self.service_sid)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Selected verification backend with its settings
#[derive(Debug, Clone)]
pub enum VerifyProviderConfig {
    Twilio(TwilioConfig),
    /// Local development backend accepting a single fixed code
    Mock { code: String },
}

impl VerifyProviderConfig {
    /// Load from `VERIFY_PROVIDER` (default `twilio`) and the provider's variables
    pub fn from_env() -> Result<Self, ConfigError> {
        match parse_or("VERIFY_PROVIDER", VerifyProvider::Twilio)? {
            VerifyProvider::Twilio => Ok(Self::Twilio(TwilioConfig::from_env()?)),
            VerifyProvider::Mock => Ok(Self::Mock {
                code: or_default("VERIFY_MOCK_CODE", DEFAULT_MOCK_CODE),
            }),
        }
    }

    pub fn provider(&self) -> VerifyProvider {
        match self {
            Self::Twilio(_) => VerifyProvider::Twilio,
            Self::Mock { .. } => VerifyProvider::Mock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twilio_is_the_default_provider() {
        temp_env::with_vars(
            [
                ("VERIFY_PROVIDER", None),
                ("TWILIO_ACCOUNT_SID", Some("ACtest")),
                ("TWILIO_AUTH_TOKEN", Some("secret-token")),
                ("TWILIO_VERIFICATION_SID", Some("VAtest")),
                ("TWILIO_VERIFY_BASE_URL", Some("http://127.0.0.1:9000/")),
                ("TWILIO_REQUEST_TIMEOUT_SECS", None),
            ],
            || {
                let config = VerifyProviderConfig::from_env().unwrap();
                let VerifyProviderConfig::Twilio(twilio) = config else {
                    panic!("expected twilio configuration");
                };
                assert_eq!(twilio.service_sid, "VAtest");
                assert_eq!(twilio.base_url, "http://127.0.0.1:9000");
                assert_eq!(twilio.request_timeout_secs, 30);
                assert!(!format!("{:?}", twilio).contains("secret-token"));
            },
        );
    }

    #[test]
    fn twilio_requires_service_sid() {
        temp_env::with_vars(
            [
                ("VERIFY_PROVIDER", Some("twilio")),
                ("TWILIO_ACCOUNT_SID", Some("ACtest")),
                ("TWILIO_AUTH_TOKEN", Some("secret-token")),
                ("TWILIO_VERIFICATION_SID", None),
            ],
            || {
                assert_eq!(
                    VerifyProviderConfig::from_env().unwrap_err(),
                    ConfigError::Missing("TWILIO_VERIFICATION_SID")
                );
            },
        );
    }

    #[test]
    fn mock_provider_needs_no_credentials() {
        temp_env::with_vars(
            [
                ("VERIFY_PROVIDER", Some("mock")),
                ("VERIFY_MOCK_CODE", None),
                ("TWILIO_ACCOUNT_SID", None),
            ],
            || {
                let config = VerifyProviderConfig::from_env().unwrap();
                assert_eq!(config.provider(), VerifyProvider::Mock);
                assert!(matches!(config, VerifyProviderConfig::Mock { code } if code == "123456"));
            },
        );
    }
}
