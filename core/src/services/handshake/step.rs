//! Handshake states and the steps the controller hands back

use crate::domain::{PendingVerification, VerificationOutcome, VerificationRequest};
use crate::session::Session;

/// Where a client stands in the handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    AwaitingRequest,
    AwaitingCode,
    Completed,
}

impl HandshakeState {
    /// Derive the state from the session.
    ///
    /// `Completed` is never stored: once the code is approved the pending
    /// number is dropped and the client is sent to the success page.
    pub fn of(session: &Session) -> Self {
        if PendingVerification::load(session).is_some() {
            HandshakeState::AwaitingCode
        } else {
            HandshakeState::AwaitingRequest
        }
    }
}

/// Redirect targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CodeRequest,
    CodeCheck,
    LoggedIn,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::CodeRequest => "/",
            Route::CodeCheck => "/verify",
            Route::LoggedIn => "/logged-in",
        }
    }

    /// State the client is in once it lands on this route
    pub fn state(&self) -> HandshakeState {
        match self {
            Route::CodeRequest => HandshakeState::AwaitingRequest,
            Route::CodeCheck => HandshakeState::AwaitingCode,
            Route::LoggedIn => HandshakeState::Completed,
        }
    }
}

/// A page to render along with its one-shot data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Code-request form, optionally prefilled from a rejected submission
    CodeRequest { prefill: Option<VerificationRequest> },
    /// Code-check form, optionally showing the last check's outcome
    CodeCheck { outcome: Option<VerificationOutcome> },
    LoggedIn,
}

/// What the presentation layer should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Render(Page),
    Redirect(Route),
}
