//! Business services containing domain logic and use cases.

pub mod handshake;
pub mod verification;

// Re-export commonly used types
pub use handshake::{HandshakeController, HandshakeState, Page, Route, Step};
pub use verification::{Channel, VerificationClient, VerificationStatus};
