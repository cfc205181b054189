// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./switchyard.toml` > `~/.config/switchyard/switchyard.toml`
//! > `/etc/switchyard/switchyard.toml` with environment variable overrides via the
//! `SWITCHYARD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RouterConfig;

/// Config sections addressable from environment variables.
const SECTIONS: &[&str] = &["provider", "models", "classifier", "cache", "fallback", "log"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/switchyard/switchyard.toml` (system-wide)
/// 3. `~/.config/switchyard/switchyard.toml` (user XDG config)
/// 4. `./switchyard.toml` (local directory)
/// 5. `SWITCHYARD_*` environment variables
pub fn load_config() -> Result<RouterConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RouterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// The path is used exactly as given: no parent-directory search. A missing
/// file surfaces as a figment I/O error rather than an empty layer.
pub fn load_config_from_path(path: &Path) -> Result<RouterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RouterConfig::default()))
        .merge(Toml::file("/etc/switchyard/switchyard.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("switchyard/switchyard.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("switchyard.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// keys survive: `SWITCHYARD_CLASSIFIER_MAX_SIMPLE_LENGTH` must map to
/// `classifier.max_simple_length`, not `classifier.max.simple.length`.
fn env_provider() -> Env {
    Env::prefixed("SWITCHYARD_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name onto a dotted config path.
///
/// Only the leading section name is split off; unknown sections pass through
/// unchanged so `deny_unknown_fields` reports them.
pub fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
