// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-assisted complexity classification.
//!
//! Asks a small routing model to label the query with a single word. If the
//! answer is not a tier name the rule-based classifier decides instead, so a
//! chatty routing model can never block a query.

use std::sync::Arc;

use switchyard_config::model::ClassifierConfig;
use switchyard_core::{ComplexityTier, ModelGateway, SwitchyardError};
use tracing::{debug, warn};

use crate::classifier::{ClassificationResult, QueryClassifier};

/// Classifies queries by asking a routing model through a gateway.
pub struct LlmClassifier {
    gateway: Arc<dyn ModelGateway>,
    model: String,
    rules: QueryClassifier,
}

impl LlmClassifier {
    pub fn new(config: &ClassifierConfig, gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            gateway,
            model: config.llm_route_model.clone(),
            rules: QueryClassifier::new(config),
        }
    }

    /// Model asked to classify.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify `query` with the routing model.
    ///
    /// A gateway failure is a [`SwitchyardError::Classification`]; an
    /// unrecognised label falls back to the rule-based result.
    pub async fn classify(&self, query: &str) -> Result<ClassificationResult, SwitchyardError> {
        let answer = self
            .gateway
            .generate_with_model(&routing_prompt(query), &self.model)
            .await
            .map_err(|e| SwitchyardError::Classification {
                message: format!("routing model {} failed: {e}", self.model),
                source: Some(Box::new(e)),
            })?;

        match parse_label(&answer) {
            Some(tier) => {
                debug!(model = %self.model, %tier, "routing model classified query");
                Ok(ClassificationResult {
                    tier,
                    reason: "routing model",
                })
            }
            None => {
                let fallback = self.rules.classify(query);
                warn!(
                    model = %self.model,
                    answer = %answer.trim(),
                    tier = %fallback.tier,
                    "routing model returned no tier label, using rule-based result"
                );
                Ok(fallback)
            }
        }
    }
}

/// Prompt sent to the routing model.
pub fn routing_prompt(query: &str) -> String {
    format!(
        "Classify this question's difficulty level. \
         Respond with ONLY ONE WORD: simple, medium, advanced\n\
         Question: {query}\n\
         Classification:"
    )
}

/// Extract a tier from the routing model's answer.
///
/// Accepts the first word ignoring case and surrounding punctuation, so
/// "Advanced." and "**medium**" both parse.
pub fn parse_label(answer: &str) -> Option<ComplexityTier> {
    let word = answer.split_whitespace().next()?;
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .parse()
        .ok()
}
