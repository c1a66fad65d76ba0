//! Signed cookie session store
//!
//! The whole [`Session`] travels in one HMAC-signed cookie. Nothing is kept
//! server side, so the session lives exactly as long as the cookie.

use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;
use pv_core::errors::SessionError;
use pv_core::Session;
use pv_shared::config::{ConfigError, SameSitePolicy, SessionConfig, MIN_SESSION_KEY_BYTES};

/// Browsers drop cookies larger than this
pub const MAX_COOKIE_BYTES: usize = 4096;

pub struct CookieSessionStore {
    key: Key,
    name: String,
    domain: String,
    path: String,
    max_age_secs: i64,
    http_only: bool,
    secure: bool,
    same_site: SameSite,
}

impl CookieSessionStore {
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        if config.key.len() < MIN_SESSION_KEY_BYTES {
            return Err(ConfigError::Invalid {
                var: "SESSION_KEY",
                reason: format!("must be at least {} bytes", MIN_SESSION_KEY_BYTES),
            });
        }

        Ok(Self {
            key: Key::derive_from(&config.key),
            name: config.cookie_name.clone(),
            domain: config.domain.clone(),
            path: config.path.clone(),
            max_age_secs: config.max_age_secs,
            http_only: config.http_only,
            secure: config.secure,
            same_site: match config.same_site {
                SameSitePolicy::Strict => SameSite::Strict,
                SameSitePolicy::Lax => SameSite::Lax,
                SameSitePolicy::None => SameSite::None,
            },
        })
    }

    /// Read the session from the request cookie.
    ///
    /// A missing cookie is an empty session. A cookie that fails signature
    /// verification or does not decode is an error.
    pub fn load(&self, req: &HttpRequest) -> Result<Session, SessionError> {
        let Some(cookie) = req.cookie(&self.name) else {
            return Ok(Session::new());
        };

        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        let verified = jar.signed(&self.key).get(&self.name).ok_or_else(|| {
            tracing::warn!(cookie = %self.name, "Session cookie failed signature verification");
            SessionError::InvalidSignature {
                name: self.name.clone(),
            }
        })?;

        serde_json::from_str(verified.value()).map_err(|e| SessionError::Decode(e.to_string()))
    }

    /// Encode and sign the session into a response cookie
    pub fn save(&self, session: &Session) -> Result<Cookie<'static>, SessionError> {
        let value =
            serde_json::to_string(session).map_err(|e| SessionError::Encode(e.to_string()))?;

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key)
            .add(Cookie::new(self.name.clone(), value));
        let mut cookie = jar
            .get(&self.name)
            .cloned()
            .ok_or_else(|| SessionError::Encode("signed cookie missing from jar".to_string()))?;

        cookie.set_domain(self.domain.clone());
        cookie.set_path(self.path.clone());
        cookie.set_max_age(Duration::seconds(self.max_age_secs));
        cookie.set_http_only(self.http_only);
        cookie.set_secure(self.secure);
        cookie.set_same_site(self.same_site);

        let size = cookie.encoded().to_string().len();
        if size > MAX_COOKIE_BYTES {
            return Err(SessionError::TooLarge {
                size,
                limit: MAX_COOKIE_BYTES,
            });
        }

        Ok(cookie)
    }
}
