//! # Infrastructure Layer
//!
//! Concrete implementations of the verification provider used by the
//! handshake:
//! - **Twilio Verify**: HTTPS client for production
//! - **Mock**: fixed-code provider for local development

pub mod verify;

pub use verify::{create_verification_client, MockVerificationClient, TwilioVerifyClient};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
