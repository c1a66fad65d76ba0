//! Error types for the session and verification provider boundaries

use thiserror::Error;

/// Session load/save failures. Always fatal to the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session cookie {name} failed signature verification")]
    InvalidSignature { name: String },

    #[error("session cookie could not be decoded: {0}")]
    Decode(String),

    #[error("session could not be encoded: {0}")]
    Encode(String),

    #[error("encoded session is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

/// Verification provider failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("verification provider unreachable: {0}")]
    Transport(String),

    #[error("verification provider rejected the request (HTTP {status}): {message}")]
    Rejected {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("verification provider response could not be decoded: {0}")]
    Decode(String),

    #[error("verification provider response did not include a status")]
    MissingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_status() {
        let err = ProviderError::Rejected {
            status: 404,
            code: Some(20404),
            message: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "verification provider rejected the request (HTTP 404): not found"
        );
    }
}
