//! Domain values carried through the verification handshake.

pub mod flash;
pub mod pending;
pub mod verification_request;

pub use flash::{Flash, VerificationOutcome};
pub use pending::{PendingVerification, PENDING_NUMBER_KEY};
pub use verification_request::{
    validate, VerificationRequest, NUMBER_FIELD, PASSWORD_FIELD, USERNAME_FIELD,
};
