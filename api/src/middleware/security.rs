//! Security middleware for enforcing HTTPS and browser security headers.
//!
//! In production this middleware:
//! - Rejects plain-HTTP requests unless a trusted proxy terminated TLS
//! - Adds HSTS, CSP and related headers to every response

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorForbidden,
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use pv_shared::config::Environment;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// Pages only load their own stylesheet and post back to themselves
const CONTENT_SECURITY_POLICY: &str =
    "default-src 'none'; style-src 'self'; form-action 'self'; frame-ancestors 'none'; base-uri 'none'";

/// Security middleware factory
#[derive(Clone)]
pub struct SecurityMiddleware {
    /// Whether to enforce HTTPS (disabled in development)
    enforce_https: bool,
    /// Whether to add security headers
    add_security_headers: bool,
    /// Peers allowed to set X-Forwarded-Proto
    trusted_proxies: Arc<Vec<String>>,
}

impl SecurityMiddleware {
    /// Full protection in production, none elsewhere
    pub fn for_environment(environment: Environment, trusted_proxies: Vec<String>) -> Self {
        let production = environment.is_production();

        tracing::info!(
            enforce_https = production,
            add_headers = production,
            trusted_proxies = ?trusted_proxies,
            "Security middleware configured"
        );

        Self {
            enforce_https: production,
            add_security_headers: production,
            trusted_proxies: Arc::new(trusted_proxies),
        }
    }

    /// No HTTPS enforcement and no extra headers
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: Arc::new(vec!["127.0.0.1".to_string(), "::1".to_string()]),
        }
    }

    /// Security headers without HTTPS enforcement
    pub fn headers_only() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: true,
            trusted_proxies: Arc::new(Vec::new()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: Arc::clone(&self.trusted_proxies),
        }))
    }
}

pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Arc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = Arc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                tracing::warn!(
                    method = %req.method(),
                    path = req.path(),
                    "Insecure request blocked"
                );
                return Err(ErrorForbidden("HTTPS required"));
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Checks if the request arrived over HTTPS, directly or via a trusted proxy
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    if req.app_config().secure() {
        return true;
    }

    if let Some(forwarded_proto) = req.headers().get("x-forwarded-proto") {
        if let Ok(proto) = forwarded_proto.to_str() {
            let peer_addr = req
                .peer_addr()
                .map(|addr| addr.ip().to_string())
                .unwrap_or_default();
            return proto.eq_ignore_ascii_case("https")
                && is_trusted_proxy(&peer_addr, trusted_proxies);
        }
    }

    false
}

/// Checks if the given IP address is in the trusted proxy list
fn is_trusted_proxy(peer_ip: &str, trusted_proxies: &[String]) -> bool {
    !peer_ip.is_empty() && trusted_proxies.iter().any(|trusted| trusted == peer_ip)
}

/// Adds security headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    // Enforce HTTPS for 1 year, including subdomains
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("camera=(), geolocation=(), microphone=(), payment=()"),
    );
}
