//! Shared utilities and common types for the phone verification server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Utility functions (phone validation and masking, field validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ConfigError, Environment, LogFormat, LoggingConfig, SameSitePolicy, ServerConfig,
    SessionConfig, TwilioConfig, VerifyProvider, VerifyProviderConfig,
};
pub use utils::{phone, validation};
