//! Application factory
//!
//! Wires the routes, middleware and shared state into an Actix-web `App`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use pv_core::services::{Route, VerificationClient};

use crate::middleware::SecurityMiddleware;
use crate::routes::handshake::{
    code_check_form, code_request_form, logged_in, not_found, submit_code_check,
    submit_code_request,
};
use crate::routes::health::health_check;
use crate::state::AppState;
use crate::static_files;

/// Create and configure the application with all dependencies
pub fn create_app<V>(
    app_state: web::Data<AppState<V>>,
    security: SecurityMiddleware,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    V: VerificationClient + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        // Request logging wraps everything, including rejected requests
        .wrap(security)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/static/{path:.*}", web::get().to(static_files::serve))
        .service(
            web::resource(Route::CodeRequest.path())
                .route(web::get().to(code_request_form::<V>))
                .route(web::post().to(submit_code_request::<V>)),
        )
        .service(
            web::resource(Route::CodeCheck.path())
                .route(web::get().to(code_check_form::<V>))
                .route(web::post().to(submit_code_check::<V>)),
        )
        .route(Route::LoggedIn.path(), web::get().to(logged_in::<V>))
        .default_service(web::route().to(not_found::<V>))
}
