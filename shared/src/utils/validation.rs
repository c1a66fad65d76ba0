//! Common validation utilities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation messages.
///
/// One message per field; a later failure on the same field replaces the
/// earlier message so the most specific rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if the trimmed character count is within bounds (inclusive)
    pub fn trimmed_length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.trim().chars().count();
        len >= min && len <= max
    }

    /// Check if the trimmed character count is at least `min`
    pub fn trimmed_length_at_least(value: &str, min: usize) -> bool {
        value.trim().chars().count() >= min
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn later_message_replaces_earlier() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "Please enter a password");
        errors.insert("password", "Please enter a longer password");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password"), Some("Please enter a longer password"));
    }

    #[test]
    fn length_checks_trim_and_count_chars() {
        assert!(!not_blank("   "));
        assert!(trimmed_length_between("  abcde  ", 5, 255));
        assert!(!trimmed_length_between(" abcd ", 5, 255));
        // Four characters, eight bytes
        assert!(!trimmed_length_at_least("éééé", 5));
        assert!(trimmed_length_at_least("ééééé", 5));
    }
}
