//! Route handlers
//!
//! - Handshake pages and form posts (`/`, `/verify`, `/logged-in`)
//! - Liveness probe (`/health`)

pub mod handshake;
pub mod health;
