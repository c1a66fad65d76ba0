//! Error responses
//!
//! Every failure that reaches a handler is fatal to the request. Details go to
//! the log; the client only ever sees a bare 500.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use pv_core::errors::{DomainError, SessionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, details = ?self, "Request failed");

        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body("Internal Server Error")
    }
}
