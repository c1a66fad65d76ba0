//! Phone number awaiting a code check

use crate::session::Session;

/// Session key holding the pending phone number
pub const PENDING_NUMBER_KEY: &str = "number";

/// A phone number a code was dispatched to and not yet checked.
///
/// Its presence in the session is what unlocks the code-check step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub phone_number: String,
}

impl PendingVerification {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    /// Read from the session; an empty stored value counts as absent.
    pub fn load(session: &Session) -> Option<Self> {
        session
            .get_value(PENDING_NUMBER_KEY)
            .filter(|number| !number.is_empty())
            .map(Self::new)
    }

    pub fn store(&self, session: &mut Session) {
        session.set_value(PENDING_NUMBER_KEY, self.phone_number.clone());
    }

    pub fn clear(session: &mut Session) {
        session.delete_value(PENDING_NUMBER_KEY);
    }
}
