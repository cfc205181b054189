// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline model gateway for Switchyard.
//!
//! `MockGateway` answers every prompt locally with a deterministic,
//! tier-specific message, so the full routing pipeline can run without
//! credentials or network access.

use async_trait::async_trait;
use tracing::debug;

use switchyard_core::{ComplexityTier, ModelGateway, ModelInfo, SwitchyardError};

/// Number of prompt characters echoed back in a mock response.
const ECHO_CHARS: usize = 30;

/// Deterministic gateway with one fixed model per tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGateway;

impl MockGateway {
    pub fn new() -> Self {
        Self
    }

    fn tier_for_model(model: &str) -> Option<ComplexityTier> {
        ComplexityTier::ALL
            .into_iter()
            .find(|&tier| model_for(tier) == model)
    }
}

fn model_for(tier: ComplexityTier) -> &'static str {
    match tier {
        ComplexityTier::Simple => "mock-simple",
        ComplexityTier::Medium => "mock-medium",
        ComplexityTier::Advanced => "mock-advanced",
    }
}

fn max_tokens_for(tier: ComplexityTier) -> u32 {
    match tier {
        ComplexityTier::Simple => 2048,
        ComplexityTier::Medium => 4096,
        ComplexityTier::Advanced => 8192,
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    fn name(&self) -> &str {
        "mock"
    }

    fn model_name(&self, tier: ComplexityTier) -> &str {
        model_for(tier)
    }

    fn models(&self) -> Vec<ModelInfo> {
        ComplexityTier::ALL
            .into_iter()
            .map(|tier| ModelInfo {
                tier,
                name: model_for(tier).to_string(),
                max_output_tokens: max_tokens_for(tier),
            })
            .collect()
    }

    async fn generate_with_model(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, SwitchyardError> {
        let head: String = prompt.chars().take(ECHO_CHARS).collect();
        let text = match Self::tier_for_model(model) {
            Some(ComplexityTier::Simple) => format!("Simple mock response for: {head}..."),
            Some(ComplexityTier::Medium) => {
                format!("Medium mock response with more detail for: {head}...")
            }
            Some(ComplexityTier::Advanced) => {
                format!("Advanced mock response with comprehensive analysis for: {head}...")
            }
            None => "Unknown model level".to_string(),
        };
        debug!(model, chars = text.chars().count(), "mock response generated");
        Ok(text)
    }
}
