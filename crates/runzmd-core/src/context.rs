//! Per-invocation action context: string-keyed headers plus the mutable
//! block body.
//!
//! Headers come straight from the markdown block the host parsed, so every
//! value is a string. The typed accessors here own the defaulting and
//! validation rules so individual actions don't re-implement them.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, RunzmdError};

#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ActionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from header pairs. Mostly a test convenience.
    pub fn with_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            body: String::new(),
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn require_header(&self, key: &str) -> Result<&str> {
        self.header(key)
            .ok_or_else(|| RunzmdError::MissingHeader(key.to_string()))
    }

    /// True iff the header is present and equals `"true"` case-insensitively.
    pub fn bool_header(&self, key: &str) -> bool {
        self.header(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Parse the header as a human-readable duration (`30s`, `1m`, `1h30m`).
    /// Absent header yields `default`; a malformed value is an error.
    pub fn duration_header(&self, key: &str, default: Duration) -> Result<Duration> {
        match self.header(key) {
            None => Ok(default),
            Some(raw) => {
                humantime::parse_duration(raw).map_err(|e| RunzmdError::InvalidHeader {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Parse the header as an integer. Absent header yields `default`.
    pub fn int_header(&self, key: &str, default: i64) -> Result<i64> {
        match self.header(key) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|_| RunzmdError::InvalidHeader {
                key: key.to_string(),
                value: raw.to_string(),
                reason: "not an integer".to_string(),
            }),
        }
    }
}
