use actix_web::{web, HttpRequest, HttpResponse};
use pv_core::services::VerificationClient;
use serde::Deserialize;

use super::respond;
use crate::handlers::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CodeCheckForm {
    #[serde(default)]
    pub code: String,
}

/// Handler for GET /verify
pub async fn code_check_form<V>(
    req: HttpRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let mut session = state.sessions.load(&req)?;
    let step = state.handshake.code_check_page(&mut session);
    respond(&state, &session, step)
}

/// Handler for POST /verify
///
/// An approved code leads to `/logged-in`; anything else back to `/verify`
/// with an error flash.
pub async fn submit_code_check<V>(
    req: HttpRequest,
    state: web::Data<AppState<V>>,
    form: web::Form<CodeCheckForm>,
) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let mut session = state.sessions.load(&req)?;
    let step = state
        .handshake
        .submit_code_check(&mut session, &form.code)
        .await?;
    respond(&state, &session, step)
}
