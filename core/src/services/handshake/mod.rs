//! Two-step phone verification handshake
//!
//! The flow moves through three states:
//!
//! ```text
//! AwaitingRequest --valid form, code sent--> AwaitingCode --code approved--> Completed
//!        ^   |                                   ^   |
//!        +---+ invalid form                      +---+ rejected code
//! ```
//!
//! State lives in the client's [`Session`](crate::session::Session): a pending
//! phone number means `AwaitingCode`, its absence means `AwaitingRequest`.
//! The controller never touches HTTP; it returns a [`Step`] that the
//! presentation layer turns into a rendered page or a redirect.

mod controller;
mod step;

#[cfg(test)]
mod tests;

pub use controller::{HandshakeController, INVALID_CODE_MESSAGE, MISSING_CODE_MESSAGE};
pub use step::{HandshakeState, Page, Route, Step};
