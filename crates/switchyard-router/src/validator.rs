// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic acceptance check for generated responses.

use std::fmt;

use switchyard_config::model::FallbackConfig;

/// Why a response was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming whitespace.
    Empty,
    /// Trimmed response shorter than the configured minimum.
    TooShort { length: usize, min: usize },
    /// Trimmed response opens with a refusal phrase.
    Refusal { phrase: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty response"),
            Rejection::TooShort { length, min } => {
                write!(f, "response too short ({length} < {min} chars)")
            }
            Rejection::Refusal { phrase } => write!(f, "response opens with \"{phrase}\""),
        }
    }
}

/// Decides whether a response is usable.
///
/// A response is rejected when, after trimming, it is empty, shorter than
/// `min_response_length` characters, or its lower-cased text starts with an
/// invalid phrase. Refusal wording later in the text is accepted.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    min_length: usize,
    invalid_phrases: Vec<String>,
}

impl ResponseValidator {
    pub fn new(config: &FallbackConfig) -> Self {
        Self {
            min_length: config.min_response_length,
            invalid_phrases: config
                .invalid_phrases
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// `Ok(())` if the response is acceptable, otherwise the first reason it is not.
    pub fn check(&self, response: &str) -> Result<(), Rejection> {
        let trimmed = response.trim();
        if trimmed.is_empty() {
            return Err(Rejection::Empty);
        }

        let length = trimmed.chars().count();
        if length < self.min_length {
            return Err(Rejection::TooShort {
                length,
                min: self.min_length,
            });
        }

        let lower = trimmed.to_lowercase();
        if let Some(phrase) = self
            .invalid_phrases
            .iter()
            .find(|p| lower.starts_with(p.as_str()))
        {
            return Err(Rejection::Refusal {
                phrase: phrase.clone(),
            });
        }

        Ok(())
    }

    pub fn is_valid(&self, response: &str) -> bool {
        self.check(response).is_ok()
    }
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::new(&FallbackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_answers() {
        let v = ResponseValidator::default();
        assert!(v.is_valid("Paris is the capital of France."));
        assert!(v.is_valid("Hello"));
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        let v = ResponseValidator::default();
        assert_eq!(v.check(""), Err(Rejection::Empty));
        assert_eq!(v.check("  \n\t "), Err(Rejection::Empty));
    }

    #[test]
    fn rejects_short_after_trimming() {
        let v = ResponseValidator::default();
        assert_eq!(
            v.check("   ok  "),
            Err(Rejection::TooShort { length: 2, min: 5 })
        );
        assert!(!v.is_valid("Yes."));
    }

    #[test]
    fn min_length_counts_characters() {
        let v = ResponseValidator::default();
        // Five characters, ten bytes.
        assert!(v.is_valid("ééééé"));
    }

    #[test]
    fn refusal_prefix_is_case_insensitive() {
        let v = ResponseValidator::default();
        assert!(matches!(
            v.check("I DON'T KNOW the answer to that."),
            Err(Rejection::Refusal { .. })
        ));
        assert!(!v.is_valid("  i'm unable to help with that request"));
    }

    #[test]
    fn refusal_later_in_text_is_accepted() {
        let v = ResponseValidator::default();
        assert!(v.is_valid("Honestly, I don't know of a better approach than this."));
    }

    #[test]
    fn configured_phrases_are_case_folded() {
        let config = FallbackConfig {
            invalid_phrases: vec!["As An AI".to_string()],
            ..FallbackConfig::default()
        };
        let v = ResponseValidator::new(&config);
        assert!(!v.is_valid("as an ai model I cannot"));
        assert!(v.is_valid("I don't know, but here is a guess"));
    }

    #[test]
    fn rejection_display_is_readable() {
        assert_eq!(
            Rejection::TooShort { length: 2, min: 5 }.to_string(),
            "response too short (2 < 5 chars)"
        );
    }
}
