// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Switchyard configuration system.

use std::io::Write;

use switchyard_config::diagnostic::ConfigError;
use switchyard_config::model::{ClassifierMethod, RouterConfig};
use switchyard_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use switchyard_core::ComplexityTier;

/// Valid TOML with all known sections deserializes successfully.
#[test]
fn valid_toml_deserializes_into_router_config() {
    let toml = r#"
[provider]
name = "mock"
timeout_secs = 30

[models]
simple = "small"
medium = "mid"
advanced = "large"
advanced_max_tokens = 16000

[classifier]
method = "llm"
max_simple_length = 40
max_medium_length = 150
complex_keywords = ["analyze"]

[cache]
enabled = false
path = "/tmp/switchyard-cache.json"

[fallback]
enabled = true
max_retries = 1
invalid_phrases = ["sorry"]

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.provider.name, "mock");
    assert_eq!(config.provider.timeout_secs, 30);
    assert_eq!(config.models.model_for(ComplexityTier::Medium), "mid");
    assert_eq!(config.models.max_tokens_for(ComplexityTier::Advanced), 16000);
    assert_eq!(config.models.max_tokens_for(ComplexityTier::Simple), 2048);
    assert_eq!(config.classifier.method, ClassifierMethod::Llm);
    assert_eq!(config.classifier.max_simple_length, 40);
    assert_eq!(config.classifier.complex_keywords, vec!["analyze"]);
    assert!(!config.cache.enabled);
    assert_eq!(config.fallback.max_retries, 1);
    assert_eq!(config.fallback.invalid_phrases, vec!["sorry"]);
    assert_eq!(config.log.level, "debug");
}

/// An empty document yields the documented defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should be valid");
    assert_eq!(config.provider.name, "gemini");
    assert_eq!(config.models.simple, "gemini-1.5-flash-latest");
    assert_eq!(config.models.medium, "gemini-2.5-flash");
    assert_eq!(config.models.advanced, "gemini-2.5-pro");
    assert_eq!(config.classifier.method, ClassifierMethod::RuleBased);
    assert_eq!(config.classifier.max_simple_length, 50);
    assert_eq!(config.classifier.max_medium_length, 200);
    assert!(config.classifier.complex_keywords.contains(&"synthesize".to_string()));
    assert!(config.cache.enabled);
    assert_eq!(config.cache.path, "data/cache/query_cache.json");
    assert!(config.fallback.enabled);
    assert_eq!(config.fallback.max_retries, 2);
    assert_eq!(config.fallback.min_response_length, 5);
    assert!(config.fallback.invalid_phrases.contains(&"i cannot provide".to_string()));
}

/// Unknown keys produce a diagnostic with a suggestion and a source span.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[fallback]
max_retires = 3
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            span,
            ..
        } => {
            assert_eq!(key, "max_retires");
            assert_eq!(suggestion.as_deref(), Some("max_retries"));
            assert!(span.is_some(), "inline source should be located");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// An unknown classifier method is reported as an invalid value.
#[test]
fn unknown_classifier_method_is_invalid() {
    let toml = r#"
[classifier]
method = "neural"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown method");
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { detail, .. } if detail.contains("neural")),
        "got {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn unknown_provider_fails_validation() {
    let errors = load_and_validate_str("[provider]\nname = \"openai\"\n")
        .expect_err("openai is not compiled in");
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("openai")));
}

/// Wrong value types are reported as invalid values.
#[test]
fn wrong_type_is_invalid_value() {
    let errors = load_and_validate_str("[cache]\nenabled = \"yes\"\n").expect_err("string is not bool");
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { .. }),
        "got {errors:?}"
    );
}

/// A config file on disk is loaded and validated.
#[test]
fn load_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[provider]\nname = \"mock\"\n\n[fallback]\nmax_retries = 0").expect("write");

    let config = load_and_validate_path(file.path()).expect("file config should load");
    assert_eq!(config.provider.name, "mock");
    assert_eq!(config.fallback.max_retries, 0);
}

/// An explicit config path that does not exist is an error, not a fallback to defaults.
#[test]
fn missing_explicit_path_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.toml");

    let errors = load_and_validate_path(&path).expect_err("missing file must not load");
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(&errors[0], ConfigError::FileNotFound { path: p } if p.ends_with("nope.toml")),
        "got {errors:?}"
    );
}

/// A directory is not a config file.
#[test]
fn directory_as_explicit_path_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let errors = load_and_validate_path(dir.path()).expect_err("directory must not load");
    assert!(matches!(&errors[0], ConfigError::FileNotFound { .. }), "got {errors:?}");
}

/// The effective configuration renders back to TOML that parses to the same values.
#[test]
fn effective_config_renders_as_toml() {
    let mut config = RouterConfig::default();
    config.provider.name = "mock".to_string();
    config.classifier.method = ClassifierMethod::Llm;

    let rendered = config.to_toml().expect("config should serialize");
    assert!(rendered.contains("method = \"llm\""));
    assert!(!rendered.contains("api_key"), "unset secrets must not be rendered");

    let reparsed = load_and_validate_str(&rendered).expect("rendered config should reload");
    assert_eq!(reparsed.provider.name, "mock");
    assert_eq!(reparsed.classifier.method, ClassifierMethod::Llm);
}
