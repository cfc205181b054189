// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Switchyard.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use switchyard_core::ComplexityTier;

/// Top-level Switchyard configuration.
///
/// Read once at startup and passed by value or reference into the classifier,
/// cache and routing engine. Nothing mutates it while a query is routed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Which model gateway to use and how to reach it.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Tier to model-name mapping.
    #[serde(default)]
    pub models: ModelsConfig,

    /// Complexity classifier settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Response cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Validation and escalation settings.
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl RouterConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Model provider selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Gateway implementation: "gemini" or "mock".
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// API key. `None` falls back to the provider's environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override for the provider's API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider_name() -> String {
    "gemini".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Tier to model mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    /// Model identifier for the simple tier.
    #[serde(default = "default_simple_model")]
    pub simple: String,

    /// Model identifier for the medium tier.
    #[serde(default = "default_medium_model")]
    pub medium: String,

    /// Model identifier for the advanced tier.
    #[serde(default = "default_advanced_model")]
    pub advanced: String,

    /// Max output tokens for simple tier responses.
    #[serde(default = "default_simple_max_tokens")]
    pub simple_max_tokens: u32,

    /// Max output tokens for medium tier responses.
    #[serde(default = "default_medium_max_tokens")]
    pub medium_max_tokens: u32,

    /// Max output tokens for advanced tier responses.
    #[serde(default = "default_advanced_max_tokens")]
    pub advanced_max_tokens: u32,
}

impl ModelsConfig {
    /// Model identifier configured for `tier`.
    pub fn model_for(&self, tier: ComplexityTier) -> &str {
        match tier {
            ComplexityTier::Simple => &self.simple,
            ComplexityTier::Medium => &self.medium,
            ComplexityTier::Advanced => &self.advanced,
        }
    }

    /// Max output tokens configured for `tier`.
    pub fn max_tokens_for(&self, tier: ComplexityTier) -> u32 {
        match tier {
            ComplexityTier::Simple => self.simple_max_tokens,
            ComplexityTier::Medium => self.medium_max_tokens,
            ComplexityTier::Advanced => self.advanced_max_tokens,
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            simple: default_simple_model(),
            medium: default_medium_model(),
            advanced: default_advanced_model(),
            simple_max_tokens: default_simple_max_tokens(),
            medium_max_tokens: default_medium_max_tokens(),
            advanced_max_tokens: default_advanced_max_tokens(),
        }
    }
}

fn default_simple_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_medium_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_advanced_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_simple_max_tokens() -> u32 {
    2048
}

fn default_medium_max_tokens() -> u32 {
    4096
}

fn default_advanced_max_tokens() -> u32 {
    8192
}

/// How queries are classified into tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierMethod {
    /// Deterministic length and keyword rules.
    #[default]
    RuleBased,
    /// Ask a small model for a one-word difficulty label.
    Llm,
}

/// Complexity classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Classification method.
    #[serde(default)]
    pub method: ClassifierMethod,

    /// Queries up to this many characters may classify as simple.
    #[serde(default = "default_max_simple_length")]
    pub max_simple_length: usize,

    /// Queries longer than this many characters always classify as advanced.
    #[serde(default = "default_max_medium_length")]
    pub max_medium_length: usize,

    /// Substrings that push a medium-length query to the advanced tier.
    #[serde(default = "default_complex_keywords")]
    pub complex_keywords: Vec<String>,

    /// Accepted for compatibility; does not influence classification.
    #[serde(default = "default_simple_keywords")]
    pub simple_keywords: Vec<String>,

    /// Model asked for a difficulty label when `method = "llm"`.
    #[serde(default = "default_llm_route_model")]
    pub llm_route_model: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            method: ClassifierMethod::default(),
            max_simple_length: default_max_simple_length(),
            max_medium_length: default_max_medium_length(),
            complex_keywords: default_complex_keywords(),
            simple_keywords: default_simple_keywords(),
            llm_route_model: default_llm_route_model(),
        }
    }
}

fn default_max_simple_length() -> usize {
    50
}

fn default_max_medium_length() -> usize {
    200
}

fn default_complex_keywords() -> Vec<String> {
    [
        "analyze", "compare", "contrast", "evaluate", "critique", "interpret", "discuss",
        "theorize", "synthesize", "examine", "investigate", "assess", "review", "debate",
        "argue", "justify", "validate", "criticize", "appraise", "judge",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_simple_keywords() -> Vec<String> {
    [
        "what", "when", "where", "who", "which", "define", "list", "name", "find", "show",
        "tell", "give", "provide", "identify", "state", "mention", "recall", "recognize",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_llm_route_model() -> String {
    "gemini-1.5-flash-002".to_string()
}

/// Response cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Enable the cache. When false the cache never touches disk.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Path to the JSON cache file.
    #[serde(default = "default_cache_path")]
    pub path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            path: default_cache_path(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_path() -> String {
    "data/cache/query_cache.json".to_string()
}

/// Response validation and tier escalation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    /// Escalate to a higher tier on invalid or failed responses.
    #[serde(default = "default_fallback_enabled")]
    pub enabled: bool,

    /// Maximum number of escalations per query.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Minimum trimmed length, in characters, of a valid response.
    #[serde(default = "default_min_response_length")]
    pub min_response_length: usize,

    /// Lower-case prefixes that mark a response as a refusal.
    #[serde(default = "default_invalid_phrases")]
    pub invalid_phrases: Vec<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_fallback_enabled(),
            max_retries: default_max_retries(),
            min_response_length: default_min_response_length(),
            invalid_phrases: default_invalid_phrases(),
        }
    }
}

fn default_fallback_enabled() -> bool {
    true
}

fn default_max_retries() -> u32 {
    2
}

fn default_min_response_length() -> usize {
    5
}

fn default_invalid_phrases() -> Vec<String> {
    [
        "i don't know",
        "i'm not sure",
        "i can't help",
        "i cannot help",
        "i don't have information",
        "i'm unable to",
        "i cannot provide",
        "i don't understand",
        "i can't answer",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
