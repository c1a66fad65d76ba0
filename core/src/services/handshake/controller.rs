//! Handshake controller

use std::sync::Arc;

use pv_shared::phone::mask_phone_number;

use crate::domain::{Flash, PendingVerification, VerificationOutcome, VerificationRequest};
use crate::errors::DomainResult;
use crate::services::verification::{Channel, VerificationClient};
use crate::session::Session;

use super::step::{HandshakeState, Page, Route, Step};

pub const INVALID_CODE_MESSAGE: &str = "The verification code was not valid";
pub const MISSING_CODE_MESSAGE: &str = "Please enter the verification code";

/// Drives the request-code / check-code handshake against a session.
///
/// Every operation mutates the session in place; the caller is responsible
/// for persisting it afterwards, whatever the outcome.
pub struct HandshakeController<V: VerificationClient + ?Sized> {
    client: Arc<V>,
    flash_key: String,
}

impl<V: VerificationClient + ?Sized> HandshakeController<V> {
    /// Create a controller
    ///
    /// # Arguments
    ///
    /// * `client` - Verification provider
    /// * `flash_key` - Session key flashes are queued under
    pub fn new(client: Arc<V>, flash_key: impl Into<String>) -> Self {
        Self {
            client,
            flash_key: flash_key.into(),
        }
    }

    /// Render the code-request form, consuming any pending flash.
    ///
    /// A `ValidationErrors` flash prefills the form; any other flash is
    /// dropped.
    pub fn code_request_page(&self, session: &mut Session) -> Step {
        let prefill = session
            .take_flashes(&self.flash_key)
            .into_iter()
            .next()
            .and_then(Flash::into_validation_errors);

        Step::Render(Page::CodeRequest { prefill })
    }

    /// Handle a code-request form submission.
    ///
    /// Invalid forms are flashed back to the request page. Valid forms
    /// trigger exactly one provider call; its failure aborts the request.
    pub async fn submit_code_request(
        &self,
        session: &mut Session,
        mut request: VerificationRequest,
    ) -> DomainResult<Step> {
        if !request.validate() {
            tracing::info!(
                event = "code_request_rejected",
                fields = ?request.errors.fields().collect::<Vec<_>>(),
                "Code request form failed validation"
            );
            session.add_flash(
                self.flash_key.clone(),
                Flash::ValidationErrors(request.into_prefill()),
            );
            return Ok(self.redirect(HandshakeState::AwaitingRequest, Route::CodeRequest));
        }

        let masked = mask_phone_number(&request.phone_number);
        let status = self
            .client
            .start_verification(&request.phone_number, Channel::Sms)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "start_verification_failed",
                    "Verification provider failed to dispatch a code"
                );
                e
            })?;

        tracing::info!(
            phone = %masked,
            status = %status,
            event = "code_dispatched",
            "Storing phone number in session"
        );
        PendingVerification::new(request.phone_number).store(session);

        Ok(self.redirect(HandshakeState::AwaitingRequest, Route::CodeCheck))
    }

    /// Render the code-check form, or send the client back to step one when
    /// there is no pending number.
    pub fn code_check_page(&self, session: &mut Session) -> Step {
        if PendingVerification::load(session).is_none() {
            tracing::info!(
                event = "code_check_without_pending_number",
                "Phone number not available in session"
            );
            return Step::Redirect(Route::CodeRequest);
        }

        let outcome = session
            .take_flashes(&self.flash_key)
            .into_iter()
            .next()
            .and_then(Flash::into_verification_outcome);

        Step::Render(Page::CodeCheck { outcome })
    }

    /// Handle a code-check form submission.
    ///
    /// Only an `approved` status completes the handshake. A provider error or
    /// any other status keeps the pending number so the user may retry.
    pub async fn submit_code_check(&self, session: &mut Session, code: &str) -> DomainResult<Step> {
        let Some(pending) = PendingVerification::load(session) else {
            tracing::info!(
                event = "code_check_without_pending_number",
                "Phone number not available in session"
            );
            return Ok(Step::Redirect(Route::CodeRequest));
        };

        let code = code.trim();
        if code.is_empty() {
            session.add_flash(
                self.flash_key.clone(),
                Flash::VerificationOutcome(VerificationOutcome::error(MISSING_CODE_MESSAGE)),
            );
            return Ok(self.redirect(HandshakeState::AwaitingCode, Route::CodeCheck));
        }

        let masked = mask_phone_number(&pending.phone_number);
        match self.client.check_verification(&pending.phone_number, code).await {
            Ok(status) if status.is_approved() => {
                tracing::info!(
                    phone = %masked,
                    status = %status,
                    event = "code_approved",
                    "Verification code approved"
                );
                PendingVerification::clear(session);
                Ok(self.redirect(HandshakeState::AwaitingCode, Route::LoggedIn))
            }
            Ok(status) => {
                tracing::warn!(
                    phone = %masked,
                    status = %status,
                    event = "code_not_approved",
                    "Verification code was not approved"
                );
                self.flash_invalid_code(session);
                Ok(self.redirect(HandshakeState::AwaitingCode, Route::CodeCheck))
            }
            Err(e) => {
                tracing::warn!(
                    phone = %masked,
                    error = %e,
                    event = "code_check_failed",
                    "Verification provider rejected the code check"
                );
                self.flash_invalid_code(session);
                Ok(self.redirect(HandshakeState::AwaitingCode, Route::CodeCheck))
            }
        }
    }

    /// Render the success page. It has no entry guard and no one-shot data.
    pub fn logged_in_page(&self) -> Step {
        Step::Render(Page::LoggedIn)
    }

    fn flash_invalid_code(&self, session: &mut Session) {
        session.add_flash(
            self.flash_key.clone(),
            Flash::VerificationOutcome(VerificationOutcome::error(INVALID_CODE_MESSAGE)),
        );
    }

    fn redirect(&self, from: HandshakeState, to: Route) -> Step {
        tracing::debug!(from = ?from, to = ?to.state(), path = to.path(), "Handshake transition");
        Step::Redirect(to)
    }
}
