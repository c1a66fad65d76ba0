//! Verification provider interface
//!
//! The handshake talks to the SMS provider only through
//! [`VerificationClient`], so it can be driven by an in-memory fake in tests
//! and by the Twilio Verify client in production.

mod traits;
mod types;

pub use traits::VerificationClient;
pub use types::{Channel, VerificationStatus};
