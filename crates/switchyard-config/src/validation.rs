// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints that serde attributes cannot express, such as
//! threshold ordering and non-empty keyword lists.

use crate::diagnostic::ConfigError;
use crate::model::RouterConfig;

/// Gateway implementations compiled into the binary.
pub const KNOWN_PROVIDERS: &[&str] = &["gemini", "mock"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    if !KNOWN_PROVIDERS.contains(&config.provider.name.as_str()) {
        fail(format!(
            "provider.name `{}` is not a known provider (expected one of: {})",
            config.provider.name,
            KNOWN_PROVIDERS.join(", ")
        ));
    }

    if config.provider.timeout_secs == 0 {
        fail("provider.timeout_secs must be at least 1".to_string());
    }

    for (key, value) in [
        ("models.simple", &config.models.simple),
        ("models.medium", &config.models.medium),
        ("models.advanced", &config.models.advanced),
        ("classifier.llm_route_model", &config.classifier.llm_route_model),
    ] {
        if value.trim().is_empty() {
            fail(format!("{key} must not be empty"));
        }
    }

    if config.classifier.max_simple_length > config.classifier.max_medium_length {
        fail(format!(
            "classifier.max_simple_length ({}) must not exceed classifier.max_medium_length ({})",
            config.classifier.max_simple_length, config.classifier.max_medium_length
        ));
    }

    // An empty keyword matches every query; an empty phrase rejects every response.
    if config.classifier.complex_keywords.iter().any(|k| k.is_empty()) {
        fail("classifier.complex_keywords must not contain empty strings".to_string());
    }
    if config.fallback.invalid_phrases.iter().any(|p| p.is_empty()) {
        fail("fallback.invalid_phrases must not contain empty strings".to_string());
    }

    if config.fallback.min_response_length == 0 {
        fail("fallback.min_response_length must be at least 1".to_string());
    }

    if config.cache.enabled && config.cache.path.trim().is_empty() {
        fail("cache.path must not be empty when the cache is enabled".to_string());
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        fail(format!(
            "log.level `{}` is not one of: {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
