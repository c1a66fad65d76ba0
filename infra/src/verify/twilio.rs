//! Twilio Verify Client Implementation
//!
//! Talks to the Twilio Verify v2 REST API: one call to dispatch a code and one
//! to check it. Codes are generated, delivered and expired by Twilio; this
//! client only relays the phone number and the code the user typed.
//!
//! ## Features
//!
//! - HTTP basic authentication with the account SID and auth token
//! - Per-request timeout from configuration
//! - Twilio error bodies mapped to `ProviderError::Rejected`
//! - Security: Phone number masking in logs
//!
//! Requests are never retried. A failed dispatch surfaces to the user and a
//! failed check is reported as an invalid code.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use pv_core::errors::ProviderError;
use pv_core::services::verification::{Channel, VerificationClient, VerificationStatus};
use pv_shared::config::TwilioConfig;
use pv_shared::phone::mask_phone_number;

use crate::InfrastructureError;

const VERIFICATIONS: &str = "Verifications";
const VERIFICATION_CHECK: &str = "VerificationCheck";

/// Subset of the verification resource returned by both endpoints
#[derive(Debug, Deserialize)]
struct VerificationResource {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    status: Option<VerificationStatus>,
}

/// Error body Twilio returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

/// Twilio Verify client
pub struct TwilioVerifyClient {
    http: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioVerifyClient {
    /// Create a new client with the configured request timeout
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            service_sid = %config.service_sid,
            base_url = %config.base_url,
            "Twilio Verify client initialized"
        );

        Ok(Self { http, config })
    }

    fn endpoint(&self, resource: &str) -> String {
        format!(
            "{}/v2/Services/{}/{}",
            self.config.base_url, self.config.service_sid, resource
        )
    }

    /// POST a form to a Verify resource and extract the verification status
    async fn post_form(
        &self,
        resource: &str,
        form: &[(&str, &str)],
    ) -> Result<VerificationStatus, ProviderError> {
        let url = self.endpoint(resource);
        debug!(url = %url, "Calling Twilio Verify");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                error!(resource, error = %e, "Request to Twilio Verify failed");
                ProviderError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let rejected = rejection(status.as_u16(), &body);
            warn!(resource, http_status = status.as_u16(), error = %rejected, "Twilio Verify returned an error");
            return Err(rejected);
        }

        let resource_body: VerificationResource =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!(
            sid = resource_body.sid.as_deref().unwrap_or("-"),
            "Twilio Verify responded"
        );

        resource_body.status.ok_or(ProviderError::MissingStatus)
    }
}

/// Map a non-2xx response to `ProviderError::Rejected`, using the Twilio error
/// body when it parses
fn rejection(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<TwilioErrorBody>(body) {
        Ok(parsed) => ProviderError::Rejected {
            status,
            code: parsed.code,
            message: parsed
                .message
                .unwrap_or_else(|| format!("HTTP {}", status)),
        },
        Err(_) => ProviderError::Rejected {
            status,
            code: None,
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            },
        },
    }
}

#[async_trait]
impl VerificationClient for TwilioVerifyClient {
    async fn start_verification(
        &self,
        phone: &str,
        channel: Channel,
    ) -> Result<VerificationStatus, ProviderError> {
        info!(
            phone = %mask_phone_number(phone),
            channel = %channel,
            "Requesting verification code via Twilio"
        );
        self.post_form(VERIFICATIONS, &[("To", phone), ("Channel", channel.as_str())])
            .await
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError> {
        info!(
            phone = %mask_phone_number(phone),
            "Checking verification code via Twilio"
        );
        self.post_form(VERIFICATION_CHECK, &[("To", phone), ("Code", code)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> TwilioConfig {
        TwilioConfig {
            account_sid: "ACtest_account_sid".to_string(),
            auth_token: "test_auth_token".to_string(),
            service_sid: "VAtest_service".to_string(),
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_endpoint_urls() {
        let client = TwilioVerifyClient::new(config("https://verify.twilio.com")).unwrap();
        assert_eq!(
            client.endpoint(VERIFICATIONS),
            "https://verify.twilio.com/v2/Services/VAtest_service/Verifications"
        );
        assert_eq!(
            client.endpoint(VERIFICATION_CHECK),
            "https://verify.twilio.com/v2/Services/VAtest_service/VerificationCheck"
        );
    }

    #[test]
    fn test_rejection_parses_twilio_error_body() {
        let body = r#"{"code":60200,"message":"Invalid parameter `To`","more_info":"https://www.twilio.com/docs/errors/60200","status":400}"#;
        assert_eq!(
            rejection(400, body),
            ProviderError::Rejected {
                status: 400,
                code: Some(60200),
                message: "Invalid parameter `To`".to_string(),
            }
        );
    }

    #[test]
    fn test_rejection_falls_back_to_raw_body() {
        assert_eq!(
            rejection(502, "Bad Gateway"),
            ProviderError::Rejected {
                status: 502,
                code: None,
                message: "Bad Gateway".to_string(),
            }
        );
        assert_eq!(
            rejection(503, ""),
            ProviderError::Rejected {
                status: 503,
                code: None,
                message: "HTTP 503".to_string(),
            }
        );
    }
}
