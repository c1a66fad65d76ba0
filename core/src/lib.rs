//! # PhoneVerify Core
//!
//! Domain layer for the phone verification gate. This crate contains the
//! form validator, the session and flash model, the verification provider
//! interface and the two-step handshake controller. It has no knowledge of
//! HTTP, cookies or templates.

pub mod domain;
pub mod errors;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use session::Session;
