//! Handshake route handlers
//!
//! Each handler loads the session, asks the controller for the next step and
//! writes the session back, whatever that step is.

pub mod code_check;
pub mod code_request;
pub mod logged_in;

pub use code_check::{code_check_form, submit_code_check};
pub use code_request::{code_request_form, submit_code_request};
pub use logged_in::logged_in;

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use pv_core::services::{Step, VerificationClient};
use pv_core::Session;

use crate::handlers::ApiError;
use crate::state::AppState;

/// Turn a controller step into a response carrying the saved session
fn respond<V>(state: &AppState<V>, session: &Session, step: Step) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized,
{
    let cookie = state.sessions.save(session)?;

    match step {
        Step::Redirect(route) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, route.path()))
            .cookie(cookie)
            .finish()),
        Step::Render(page) => {
            let body = state.templates.render_page(&page)?;
            Ok(HttpResponse::Ok()
                .content_type(ContentType::html())
                .cookie(cookie)
                .body(body))
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found<V>(state: web::Data<AppState<V>>) -> Result<HttpResponse, ApiError>
where
    V: VerificationClient + ?Sized + 'static,
{
    let body = state.templates.render_not_found()?;
    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(body))
}
