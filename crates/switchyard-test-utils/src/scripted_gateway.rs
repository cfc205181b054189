// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted model gateway for deterministic routing tests.
//!
//! `ScriptedGateway` implements `ModelGateway` with replies queued per model
//! and records every call, so tests can assert which tiers were tried and in
//! what order.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use switchyard_core::{ComplexityTier, ModelGateway, ModelInfo, SwitchyardError};

/// Model names served for each tier, in tier order.
pub const SCRIPTED_MODELS: [&str; 3] = ["scripted-simple", "scripted-medium", "scripted-advanced"];

/// One recorded call to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayCall {
    pub model: String,
    pub prompt: String,
}

type Reply = Result<String, String>;

/// A gateway that replays queued replies per model.
///
/// Replies are popped from a FIFO queue keyed by model name. When a model's
/// queue is empty a default reply naming the model is returned, which passes
/// response validation.
pub struct ScriptedGateway {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl ScriptedGateway {
    /// Create a gateway with no scripted replies.
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Model name served for `tier`.
    pub fn tier_model(tier: ComplexityTier) -> &'static str {
        match tier {
            ComplexityTier::Simple => SCRIPTED_MODELS[0],
            ComplexityTier::Medium => SCRIPTED_MODELS[1],
            ComplexityTier::Advanced => SCRIPTED_MODELS[2],
        }
    }

    /// Queue a successful reply for the model bound to `tier`.
    pub fn respond(self, tier: ComplexityTier, text: impl Into<String>) -> Self {
        self.respond_model(Self::tier_model(tier), text)
    }

    /// Queue a failure for the model bound to `tier`.
    pub fn fail(self, tier: ComplexityTier, message: impl Into<String>) -> Self {
        self.fail_model(Self::tier_model(tier), message)
    }

    /// Queue a successful reply for an arbitrary model name.
    pub fn respond_model(self, model: &str, text: impl Into<String>) -> Self {
        self.push(model, Ok(text.into()))
    }

    /// Queue a failure for an arbitrary model name.
    pub fn fail_model(self, model: &str, message: impl Into<String>) -> Self {
        self.push(model, Err(message.into()))
    }

    fn push(mut self, model: &str, reply: Reply) -> Self {
        self.scripts
            .get_mut()
            .entry(model.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// All calls made so far, oldest first.
    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().await.clone()
    }

    /// Model names called so far, oldest first.
    pub async fn models_called(&self) -> Vec<String> {
        self.calls
            .lock()
            .await
            .iter()
            .map(|c| c.model.clone())
            .collect()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self, tier: ComplexityTier) -> &str {
        Self::tier_model(tier)
    }

    fn models(&self) -> Vec<ModelInfo> {
        ComplexityTier::ALL
            .iter()
            .map(|&tier| ModelInfo {
                tier,
                name: Self::tier_model(tier).to_string(),
                max_output_tokens: 1024,
            })
            .collect()
    }

    async fn generate_with_model(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, SwitchyardError> {
        self.calls.lock().await.push(GatewayCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        let reply = self
            .scripts
            .lock()
            .await
            .get_mut(model)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(SwitchyardError::Provider {
                message,
                source: None,
            }),
            None => Ok(format!("scripted reply from {model}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let gateway = ScriptedGateway::new();
        let reply = gateway.generate("hi", ComplexityTier::Medium).await.unwrap();
        assert_eq!(reply, "scripted reply from scripted-medium");
    }

    #[tokio::test]
    async fn queued_replies_returned_in_order_per_model() {
        let gateway = ScriptedGateway::new()
            .respond(ComplexityTier::Simple, "first")
            .fail(ComplexityTier::Simple, "boom")
            .respond(ComplexityTier::Advanced, "deep");

        assert_eq!(gateway.generate("q", ComplexityTier::Simple).await.unwrap(), "first");
        let err = gateway.generate("q", ComplexityTier::Simple).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
        assert_eq!(gateway.generate("q", ComplexityTier::Advanced).await.unwrap(), "deep");

        assert_eq!(
            gateway.models_called().await,
            vec!["scripted-simple", "scripted-simple", "scripted-advanced"]
        );
    }

    #[tokio::test]
    async fn calls_record_prompts() {
        let gateway = ScriptedGateway::new();
        gateway.generate_with_model("route me", "router").await.unwrap();
        let calls = gateway.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "router");
        assert_eq!(calls[0].prompt, "route me");
    }
}
