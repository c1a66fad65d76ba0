//! Trait for verification provider integration

use async_trait::async_trait;

use crate::errors::ProviderError;

use super::types::{Channel, VerificationStatus};

/// A remote one-time-code service.
///
/// Both calls are single-shot: implementations must not retry on their own.
#[async_trait]
pub trait VerificationClient: Send + Sync {
    /// Ask the provider to deliver a fresh code to `phone` over `channel`
    async fn start_verification(
        &self,
        phone: &str,
        channel: Channel,
    ) -> Result<VerificationStatus, ProviderError>;

    /// Check `code` against the pending verification for `phone`
    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError>;
}
