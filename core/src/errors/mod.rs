//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ProviderError, SessionError};

use thiserror::Error;

/// Errors that abort a handshake request
///
/// Validation failures are not errors: they travel back to the user as a
/// flash. Missing handshake state is not an error either: it turns into a
/// redirect to the earlier step.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type DomainResult<T> = Result<T, DomainError>;
