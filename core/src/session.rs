//! Per-client session state
//!
//! A [`Session`] is a small key/value map plus flash queues. It is loaded from
//! and saved to the client by a store in the presentation layer; nothing in
//! this crate knows how it travels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::flash::Flash;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    values: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    flashes: BTreeMap<String, Vec<Flash>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn delete_value(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Queue a flash under `kind`; it survives until the next `take_flashes`.
    pub fn add_flash(&mut self, kind: impl Into<String>, flash: Flash) {
        self.flashes.entry(kind.into()).or_default().push(flash);
    }

    /// Remove and return every flash queued under `kind`, oldest first.
    pub fn take_flashes(&mut self, kind: &str) -> Vec<Flash> {
        self.flashes.remove(kind).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.flashes.is_empty()
    }
}
