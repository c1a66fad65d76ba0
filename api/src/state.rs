//! Shared application state

use std::sync::Arc;

use pv_core::services::{HandshakeController, VerificationClient};

use crate::session::CookieSessionStore;
use crate::templates::Templates;

/// Everything a handler needs, built once and shared through `web::Data`
pub struct AppState<V: VerificationClient + ?Sized> {
    pub handshake: HandshakeController<V>,
    pub sessions: CookieSessionStore,
    pub templates: Templates,
}

impl<V: VerificationClient + ?Sized> AppState<V> {
    pub fn new(
        client: Arc<V>,
        sessions: CookieSessionStore,
        templates: Templates,
        flash_key: impl Into<String>,
    ) -> Self {
        Self {
            handshake: HandshakeController::new(client, flash_key),
            sessions,
            templates,
        }
    }
}
