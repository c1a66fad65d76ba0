//! One-shot messages carried across a redirect

use serde::{Deserialize, Serialize};

use super::verification_request::VerificationRequest;

/// Result of a code check, shown once on the code-check form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub message: String,
    pub is_error: bool,
}

impl VerificationOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

/// A flash message payload.
///
/// Each page only understands one variant; a flash of the other variant is
/// consumed and dropped when that page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Flash {
    /// Rejected code-request form, used to redisplay errors and prefill fields
    ValidationErrors(VerificationRequest),
    /// Outcome of a code check
    VerificationOutcome(VerificationOutcome),
}

impl Flash {
    pub fn into_validation_errors(self) -> Option<VerificationRequest> {
        match self {
            Flash::ValidationErrors(request) => Some(request),
            Flash::VerificationOutcome(_) => None,
        }
    }

    pub fn into_verification_outcome(self) -> Option<VerificationOutcome> {
        match self {
            Flash::VerificationOutcome(outcome) => Some(outcome),
            Flash::ValidationErrors(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_is_tagged_by_kind() {
        let flash = Flash::VerificationOutcome(VerificationOutcome::error("nope"));
        let json = serde_json::to_value(&flash).unwrap();
        assert_eq!(json["kind"], "verification_outcome");
        assert_eq!(json["payload"]["is_error"], true);

        let back: Flash = serde_json::from_value(json).unwrap();
        assert_eq!(back, flash);
    }

    #[test]
    fn variant_accessors() {
        let outcome = Flash::VerificationOutcome(VerificationOutcome::info("sent"));
        assert!(outcome.clone().into_validation_errors().is_none());
        assert_eq!(
            outcome.into_verification_outcome(),
            Some(VerificationOutcome::info("sent"))
        );

        let invalid = Flash::ValidationErrors(VerificationRequest::new("a", "b", "c"));
        assert!(invalid.clone().into_verification_outcome().is_none());
        assert_eq!(invalid.into_validation_errors().map(|r| r.username), Some("a".to_string()));
    }
}
