//! # PhoneVerify API
//!
//! HTTP layer for the phone verification gate: routes, cookie sessions,
//! page rendering and the middleware stack around them.

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod static_files;
pub mod telemetry;
pub mod templates;

pub use app::create_app;
pub use config::Config;
pub use state::AppState;
