use actix_web::{web, HttpRequest, HttpResponse};
use pv_core::services::VerificationClient;

use super::respond;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for GET /logged-in
///
/// A static confirmation page; the session is only passed through.
pub async fn logged_in<V>(
    req: HttpRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let session = state.sessions.load(&req)?;
    let step = state.handshake.logged_in_page();
    respond(&state, &session, step)
}
