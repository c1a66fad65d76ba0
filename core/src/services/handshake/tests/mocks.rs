//! Mock verification client for testing the handshake

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::ProviderError;
use crate::services::verification::{Channel, VerificationClient, VerificationStatus};

/// A call received by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start { phone: String, channel: Channel },
    Check { phone: String, code: String },
}

// Mock provider with scripted answers
pub struct MockVerificationClient {
    pub calls: Mutex<Vec<Call>>,
    pub start_result: Result<VerificationStatus, ProviderError>,
    pub check_result: Result<VerificationStatus, ProviderError>,
}

impl MockVerificationClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            start_result: Ok(VerificationStatus::Pending),
            check_result: Ok(VerificationStatus::Approved),
        }
    }

    pub fn failing_start(error: ProviderError) -> Self {
        Self {
            start_result: Err(error),
            ..Self::new()
        }
    }

    pub fn checking(result: Result<VerificationStatus, ProviderError>) -> Self {
        Self {
            check_result: result,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationClient for MockVerificationClient {
    async fn start_verification(
        &self,
        phone: &str,
        channel: Channel,
    ) -> Result<VerificationStatus, ProviderError> {
        self.calls.lock().unwrap().push(Call::Start {
            phone: phone.to_string(),
            channel,
        });
        self.start_result.clone()
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError> {
        self.calls.lock().unwrap().push(Call::Check {
            phone: phone.to_string(),
            code: code.to_string(),
        });
        self.check_result.clone()
    }
}
