// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based query complexity classification.
//!
//! Classifies queries into Simple/Medium/Advanced tiers from their length and
//! a handful of keyword signals. No model call, no network, no latency.

use switchyard_config::model::ClassifierConfig;
use switchyard_core::ComplexityTier;

/// Leading words that mark a short query as a simple factual question.
const LEADING_WORDS: &[&str] = &[
    "what", "when", "where", "who", "how", "is", "are", "can", "do", "does",
];

/// Result of classifying a query's complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    /// The classified complexity tier.
    pub tier: ComplexityTier,
    /// Human-readable reason for the classification.
    pub reason: &'static str,
}

/// Deterministic length-and-keyword classifier.
///
/// Rules, first match wins (lengths are in characters):
/// 1. short query opening with an interrogative or auxiliary word: Simple
/// 2. medium-length query containing a complex keyword: Advanced
/// 3. any other medium-length query: Medium
/// 4. anything longer: Advanced
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    max_simple_length: usize,
    max_medium_length: usize,
    complex_keywords: Vec<String>,
}

impl QueryClassifier {
    /// Create a classifier from configuration.
    ///
    /// The configured simple keyword list is deliberately not consulted.
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            max_simple_length: config.max_simple_length,
            max_medium_length: config.max_medium_length,
            complex_keywords: config
                .complex_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Classify a query. Total: every input maps to a tier.
    pub fn classify(&self, query: &str) -> ClassificationResult {
        let length = query.chars().count();
        let lower = query.to_lowercase();

        if length <= self.max_simple_length && is_simple_factual(&lower) {
            return ClassificationResult {
                tier: ComplexityTier::Simple,
                reason: "short factual question",
            };
        }

        if length <= self.max_medium_length {
            if self.has_complex_keyword(&lower) {
                return ClassificationResult {
                    tier: ComplexityTier::Advanced,
                    reason: "complex keyword",
                };
            }
            return ClassificationResult {
                tier: ComplexityTier::Medium,
                reason: "medium length",
            };
        }

        ClassificationResult {
            tier: ComplexityTier::Advanced,
            reason: "long query",
        }
    }

    fn has_complex_keyword(&self, lower: &str) -> bool {
        self.complex_keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

/// True when `lower` starts with a leading word followed by whitespace.
fn is_simple_factual(lower: &str) -> bool {
    LEADING_WORDS.iter().any(|word| {
        lower
            .strip_prefix(word)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    })
}
