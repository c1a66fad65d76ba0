use actix_web::{web, HttpRequest, HttpResponse};
use pv_core::services::VerificationClient;
use pv_core::VerificationRequest;
use serde::Deserialize;

use super::respond;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Fields posted by the code-request form
#[derive(Deserialize)]
pub struct CodeRequestForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub number: String,
}

impl From<CodeRequestForm> for VerificationRequest {
    fn from(form: CodeRequestForm) -> Self {
        VerificationRequest::new(form.username, form.password, form.number)
    }
}

/// Handler for GET /
///
/// Renders the code-request form, prefilled from the last rejected
/// submission if there is one.
pub async fn code_request_form<V>(
    req: HttpRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let mut session = state.sessions.load(&req)?;
    let step = state.handshake.code_request_page(&mut session);
    respond(&state, &session, step)
}

/// Handler for POST /
///
/// Validates the form and asks the provider to text a code. Redirects back to
/// `/` with the errors flashed, or on to `/verify`.
pub async fn submit_code_request<V>(
    req: HttpRequest,
    state: web::Data<AppState<V>>,
    form: web::Form<CodeRequestForm>,
) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let mut session = state.sessions.load(&req)?;
    let step = state
        .handshake
        .submit_code_request(&mut session, form.into_inner().into())
        .await?;
    respond(&state, &session, step)
}
