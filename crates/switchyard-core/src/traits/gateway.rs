// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model gateway trait for generation backends (Gemini, mock, etc.).

use async_trait::async_trait;

use crate::error::SwitchyardError;
use crate::types::{ComplexityTier, ModelInfo};

/// A generation backend addressed by tier.
///
/// The routing engine depends only on this capability set, never on a
/// concrete backend. Implementations own their own timeout policy.
#[async_trait]
pub trait ModelGateway: Send + Sync + 'static {
    /// Human-readable name of this backend (e.g. "gemini").
    fn name(&self) -> &str;

    /// Model identifier bound to `tier`. Pure lookup.
    fn model_name(&self, tier: ComplexityTier) -> &str;

    /// Lists the models this gateway serves, one per tier, in tier order.
    fn models(&self) -> Vec<ModelInfo>;

    /// Generates a response from an explicitly named model.
    async fn generate_with_model(&self, prompt: &str, model: &str)
    -> Result<String, SwitchyardError>;

    /// Generates a response from the model bound to `tier`.
    async fn generate(&self, prompt: &str, tier: ComplexityTier) -> Result<String, SwitchyardError> {
        let model = self.model_name(tier).to_string();
        self.generate_with_model(prompt, &model).await
    }
}
