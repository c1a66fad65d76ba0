//! Code-request form submission and its validation rules

use std::fmt;

use pv_shared::phone::is_valid_e164;
use pv_shared::validation::{validators, FieldErrors};
use serde::{Deserialize, Serialize};

/// Form field keys, shared with the HTML forms
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const NUMBER_FIELD: &str = "number";

/// Inclusive username length bounds, in characters after trimming
pub const USERNAME_MIN_LENGTH: usize = 5;
pub const USERNAME_MAX_LENGTH: usize = 255;

/// Minimum password length, in characters after trimming
pub const PASSWORD_MIN_LENGTH: usize = 10;

/// Longest phone number that can match E.164: `+` and 15 digits
pub const NUMBER_MAX_LENGTH: usize = 16;

/// A submitted code-request form.
///
/// `errors` is empty iff every field passed the last call to
/// [`VerificationRequest::validate`]. The password is never serialized, so a
/// request stored as a flash cannot leak it into the session cookie.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub username: String,
    #[serde(skip)]
    pub password: String,
    #[serde(rename = "number")]
    pub phone_number: String,
    #[serde(default)]
    pub errors: FieldErrors,
}

impl VerificationRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            phone_number: phone_number.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Run every rule and replace `errors` with the full set of failures.
    pub fn validate(&mut self) -> bool {
        let (ok, errors) = validate(&self.username, &self.password, &self.phone_number);
        self.errors = errors;
        ok
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The request as it may be flashed back to the form.
    ///
    /// Field values are cut one character past their longest valid length so
    /// an oversized submission still fits in the session cookie and still
    /// reads as too long. The password is dropped and `errors` is kept as is.
    pub fn into_prefill(self) -> Self {
        Self {
            username: truncate_chars(self.username, USERNAME_MAX_LENGTH + 1),
            password: String::new(),
            phone_number: truncate_chars(self.phone_number, NUMBER_MAX_LENGTH + 1),
            errors: self.errors,
        }
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((end, _)) = value.char_indices().nth(max_chars) {
        value.truncate(end);
    }
    value
}

impl fmt::Debug for VerificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationRequest")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("phone_number", &self.phone_number)
            .field("errors", &self.errors)
            .finish()
    }
}

/// Validate a (username, password, phone number) triple.
///
/// Returns `(ok, errors)` where `errors` holds one message per failing field
/// and `ok` is true iff `errors` is empty.
pub fn validate(username: &str, password: &str, phone_number: &str) -> (bool, FieldErrors) {
    let mut errors = FieldErrors::new();

    if !validators::not_blank(username)
        || !validators::trimmed_length_between(username, USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH)
    {
        errors.insert(USERNAME_FIELD, "Please enter a username");
    }

    if !validators::not_blank(password) {
        errors.insert(PASSWORD_FIELD, "Please enter a password");
    } else if !validators::trimmed_length_at_least(password, PASSWORD_MIN_LENGTH) {
        errors.insert(
            PASSWORD_FIELD,
            format!(
                "Please enter a password at least {} characters long",
                PASSWORD_MIN_LENGTH
            ),
        );
    }

    if !is_valid_e164(phone_number) {
        errors.insert(NUMBER_FIELD, "Please enter a phone number in E.164 format");
    }

    (errors.is_empty(), errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PASSWORD: &str = "correct-horse";
    const GOOD_NUMBER: &str = "+15551234567";

    fn failing_fields(username: &str, password: &str, number: &str) -> Vec<String> {
        let (_, errors) = validate(username, password, number);
        errors.fields().map(str::to_string).collect()
    }

    #[test]
    fn accepts_valid_triple() {
        let (ok, errors) = validate("abcde", GOOD_PASSWORD, GOOD_NUMBER);
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn username_length_boundaries() {
        assert_eq!(failing_fields("abcd", GOOD_PASSWORD, GOOD_NUMBER), vec!["username"]);
        assert!(failing_fields("abcde", GOOD_PASSWORD, GOOD_NUMBER).is_empty());
        assert!(failing_fields(&"a".repeat(255), GOOD_PASSWORD, GOOD_NUMBER).is_empty());
        assert_eq!(
            failing_fields(&"a".repeat(256), GOOD_PASSWORD, GOOD_NUMBER),
            vec!["username"]
        );
        // Surrounding whitespace does not count towards the length
        assert_eq!(failing_fields("  abcd  ", GOOD_PASSWORD, GOOD_NUMBER), vec!["username"]);
        assert_eq!(failing_fields("     ", GOOD_PASSWORD, GOOD_NUMBER), vec!["username"]);
    }

    #[test]
    fn password_messages_distinguish_blank_and_short() {
        let (_, errors) = validate("abcde", "   ", GOOD_NUMBER);
        assert_eq!(errors.get(PASSWORD_FIELD), Some("Please enter a password"));

        let (_, errors) = validate("abcde", "123456789", GOOD_NUMBER);
        assert_eq!(
            errors.get(PASSWORD_FIELD),
            Some("Please enter a password at least 10 characters long")
        );

        assert!(failing_fields("abcde", "1234567890", GOOD_NUMBER).is_empty());
    }

    #[test]
    fn phone_number_must_be_e164() {
        assert!(failing_fields("abcde", GOOD_PASSWORD, "+15551234567").is_empty());
        assert_eq!(failing_fields("abcde", GOOD_PASSWORD, "5551234567"), vec!["number"]);
        assert_eq!(failing_fields("abcde", GOOD_PASSWORD, "+05551234567"), vec!["number"]);
    }

    #[test]
    fn reports_every_failing_field() {
        let (ok, errors) = validate("", "", "");
        assert!(!ok);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(USERNAME_FIELD));
        assert!(errors.contains(PASSWORD_FIELD));
        assert!(errors.contains(NUMBER_FIELD));
    }

    #[test]
    fn ok_iff_errors_empty_across_combinations() {
        let usernames = ["", "abcd", "abcde"];
        let passwords = ["", "short", "long-enough-password"];
        let numbers = ["", "5551234567", "+15551234567"];
        for username in usernames {
            for password in passwords {
                for number in numbers {
                    let (ok, errors) = validate(username, password, number);
                    assert_eq!(ok, errors.is_empty());
                    assert_eq!(errors.contains(USERNAME_FIELD), username != "abcde");
                    assert_eq!(
                        errors.contains(PASSWORD_FIELD),
                        password != "long-enough-password"
                    );
                    assert_eq!(errors.contains(NUMBER_FIELD), number != "+15551234567");
                }
            }
        }
    }

    #[test]
    fn validate_method_replaces_previous_errors() {
        let mut request = VerificationRequest::new("abcd", GOOD_PASSWORD, GOOD_NUMBER);
        assert!(!request.validate());
        assert!(!request.is_valid());

        request.username = "abcde".to_string();
        assert!(request.validate());
        assert!(request.is_valid());
    }

    #[test]
    fn serialization_drops_password() {
        let mut request = VerificationRequest::new("abcde", "hunter2-hunter2", "555");
        request.validate();

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"number\":\"555\""));

        let restored: VerificationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.password, "");
        assert_eq!(restored.errors, request.errors);
        assert!(!format!("{:?}", request).contains("hunter2"));
    }

    #[test]
    fn prefill_caps_oversized_fields() {
        let mut request =
            VerificationRequest::new("é".repeat(5000), GOOD_PASSWORD, "+1".repeat(3000));
        assert!(!request.validate());

        let prefill = request.clone().into_prefill();
        assert_eq!(prefill.username.chars().count(), USERNAME_MAX_LENGTH + 1);
        assert_eq!(prefill.phone_number.chars().count(), NUMBER_MAX_LENGTH + 1);
        assert_eq!(prefill.password, "");
        assert_eq!(prefill.errors, request.errors);

        // Still rejected for the same fields once cut
        let (_, errors) = validate(&prefill.username, GOOD_PASSWORD, &prefill.phone_number);
        assert_eq!(errors, request.errors);
    }

    #[test]
    fn prefill_keeps_short_fields_intact() {
        let mut request = VerificationRequest::new("abcd", "short", "5551234567");
        request.validate();

        let prefill = request.clone().into_prefill();
        assert_eq!(prefill.username, "abcd");
        assert_eq!(prefill.phone_number, "5551234567");
        assert_eq!(prefill.password, "");
    }
}
