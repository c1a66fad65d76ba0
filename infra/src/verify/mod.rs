//! Verification provider module
//!
//! Implementations of [`VerificationClient`] and a factory that picks one
//! from configuration.

use std::sync::Arc;

use pv_core::services::verification::VerificationClient;
use pv_shared::config::VerifyProviderConfig;

pub mod mock;
pub mod twilio;

pub use mock::MockVerificationClient;
pub use twilio::TwilioVerifyClient;

use crate::InfrastructureError;

/// Create a verification client based on configuration
///
/// # Arguments
///
/// * `config` - Provider selection and its settings
///
/// # Returns
///
/// A shared verification client behind the trait object
pub fn create_verification_client(
    config: &VerifyProviderConfig,
) -> Result<Arc<dyn VerificationClient>, InfrastructureError> {
    match config {
        VerifyProviderConfig::Twilio(twilio) => {
            Ok(Arc::new(TwilioVerifyClient::new(twilio.clone())?))
        }
        VerifyProviderConfig::Mock { code } => {
            if code.trim().is_empty() {
                return Err(InfrastructureError::Config(
                    "VERIFY_MOCK_CODE must not be blank".to_string(),
                ));
            }
            tracing::warn!(
                event = "mock_provider_selected",
                "Using mock verification provider, no SMS will be sent"
            );
            Ok(Arc::new(MockVerificationClient::new(code.trim())))
        }
    }
}
