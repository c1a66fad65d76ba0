//! HTML pages
//!
//! Templates are compiled into the binary and parsed once at start-up, so a
//! broken template stops the server before it binds.

use pv_core::services::Page;
use pv_core::VerificationRequest;
use tera::{Context, Tera};

const BASE: &str = "base.html";
const CODE_REQUEST: &str = "code-request-form.html";
const CODE_CHECK: &str = "code-verification-form.html";
const LOGGED_IN: &str = "logged-in.html";
const NOT_FOUND: &str = "not-found.html";

/// Parsed page templates
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (BASE, include_str!("../templates/base.html")),
            (CODE_REQUEST, include_str!("../templates/code-request-form.html")),
            (CODE_CHECK, include_str!("../templates/code-verification-form.html")),
            (LOGGED_IN, include_str!("../templates/logged-in.html")),
            (NOT_FOUND, include_str!("../templates/not-found.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render a handshake page with its one-shot data
    pub fn render_page(&self, page: &Page) -> Result<String, tera::Error> {
        let mut context = Context::new();
        let name = match page {
            Page::CodeRequest { prefill } => {
                let empty = VerificationRequest::default();
                context.insert("form", prefill.as_ref().unwrap_or(&empty));
                CODE_REQUEST
            }
            Page::CodeCheck { outcome } => {
                context.insert("outcome", outcome);
                CODE_CHECK
            }
            Page::LoggedIn => LOGGED_IN,
        };
        self.tera.render(name, &context)
    }

    pub fn render_not_found(&self) -> Result<String, tera::Error> {
        self.tera.render(NOT_FOUND, &Context::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_core::VerificationOutcome;

    #[test]
    fn empty_request_form_renders() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_page(&Page::CodeRequest { prefill: None })
            .unwrap();
        assert!(html.contains(r#"name="username" value="""#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn prefill_escapes_and_omits_password() {
        let templates = Templates::new().unwrap();
        let mut request = VerificationRequest::new("<b>abcd</b>", "hunter2-secret", "5551234567");
        request.validate();

        let html = templates
            .render_page(&Page::CodeRequest { prefill: Some(request) })
            .unwrap();

        assert!(html.contains("&lt;b&gt;abcd&lt;&#x2F;b&gt;"));
        assert!(html.contains(r#"value="5551234567""#));
        assert!(html.contains("Please enter a phone number in E.164 format"));
        assert!(!html.contains("hunter2-secret"));
    }

    #[test]
    fn check_form_shows_outcome() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_page(&Page::CodeCheck {
                outcome: Some(VerificationOutcome::error("The verification code was not valid")),
            })
            .unwrap();
        assert!(html.contains(r#"<p class="error">The verification code was not valid</p>"#));

        let html = templates
            .render_page(&Page::CodeCheck { outcome: None })
            .unwrap();
        assert!(!html.contains(r#"<p class="error">"#));
    }

    #[test]
    fn static_pages_render() {
        let templates = Templates::new().unwrap();
        assert!(templates.render_page(&Page::LoggedIn).unwrap().contains("verified"));
        assert!(templates.render_not_found().unwrap().contains("Page not found"));
    }
}
