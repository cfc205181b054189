// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk record format for cached responses.

use serde::{Deserialize, Serialize};

/// Label written for records that predate a field.
pub const UNKNOWN_LABEL: &str = "unknown";

/// A cached response, keyed in the store by its exact query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The query this response answers. Mirrors the map key.
    #[serde(default)]
    pub query: String,
    /// Response text as returned to the caller.
    pub response: String,
    /// Model that produced the response (the tier actually used).
    #[serde(default = "unknown_label")]
    pub model: String,
    /// Original complexity classification label.
    #[serde(default = "unknown_label")]
    pub complexity: String,
    /// Seconds since the Unix epoch when the entry was written.
    #[serde(default)]
    pub timestamp: f64,
    /// Local ISO-8601 time the entry was written.
    #[serde(default)]
    pub date: String,
    /// Length of `response` in characters.
    #[serde(default)]
    pub response_length: usize,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(query: &str, response: &str, model: &str, complexity: &str) -> Self {
        Self {
            query: query.to_string(),
            response: response.to_string(),
            model: model.to_string(),
            complexity: complexity.to_string(),
            timestamp: switchyard_core::unix_timestamp(),
            date: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            response_length: response.chars().count(),
        }
    }
}

fn unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}
