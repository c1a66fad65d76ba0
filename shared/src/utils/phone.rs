//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format), ASCII digits only
static E164_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("E.164 pattern is valid")
});

/// Check if a phone number is in E.164 format.
///
/// The number is matched as submitted; formatting characters are not stripped.
pub fn is_valid_e164(phone: &str) -> bool {
    E164_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., +15****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+15551234567"));
        assert!(is_valid_e164("+442071838750"));
        assert!(is_valid_e164("+12"));
        assert!(is_valid_e164("+123456789012345"));
        assert!(!is_valid_e164("5551234567")); // Missing +
        assert!(!is_valid_e164("+0123456789")); // Leading zero country code
        assert!(!is_valid_e164("+1")); // Too short
        assert!(!is_valid_e164("+1234567890123456")); // 16 digits
        assert!(!is_valid_e164("+1 555 123 4567"));
        assert!(!is_valid_e164("+1٥٥٥١٢٣٤٥٦٧")); // Arabic-Indic digits
        assert!(!is_valid_e164("+１５５５１２３")); // Fullwidth digits
        assert!(!is_valid_e164(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15551234567"), "+15****4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
