//! Mock verification provider
//!
//! Logs instead of sending an SMS and approves a single fixed code. Meant for
//! running the server locally without Twilio credentials.

use async_trait::async_trait;
use tracing::info;

use pv_core::errors::ProviderError;
use pv_core::services::verification::{Channel, VerificationClient, VerificationStatus};
use pv_shared::phone::mask_phone_number;

#[derive(Debug, Clone)]
pub struct MockVerificationClient {
    code: String,
}

impl MockVerificationClient {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl VerificationClient for MockVerificationClient {
    async fn start_verification(
        &self,
        phone: &str,
        channel: Channel,
    ) -> Result<VerificationStatus, ProviderError> {
        info!(
            phone = %mask_phone_number(phone),
            channel = %channel,
            event = "mock_code_dispatched",
            "[MOCK] Verification code would be sent, use {}",
            self.code
        );
        Ok(VerificationStatus::Pending)
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError> {
        let status = if code == self.code {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Pending
        };
        info!(
            phone = %mask_phone_number(phone),
            status = %status,
            event = "mock_code_checked",
            "[MOCK] Verification code checked"
        );
        Ok(status)
    }
}
