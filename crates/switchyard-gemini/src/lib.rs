// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini model gateway for Switchyard.
//!
//! This crate implements [`ModelGateway`] for the Gemini `generateContent`
//! API, binding each complexity tier to a configured model and output-token
//! ceiling.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use switchyard_config::model::ModelsConfig;
use switchyard_config::RouterConfig;
use switchyard_core::{ComplexityTier, ModelGateway, ModelInfo, SwitchyardError};
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini backend implementing [`ModelGateway`].
pub struct GeminiGateway {
    client: GeminiClient,
    models: ModelsConfig,
}

impl GeminiGateway {
    /// Creates a new Gemini gateway from configuration.
    ///
    /// API key resolution order:
    /// 1. `provider.api_key` if set
    /// 2. `GEMINI_API_KEY` environment variable
    pub fn new(config: &RouterConfig) -> Result<Self, SwitchyardError> {
        let api_key = resolve_api_key(config.provider.api_key.as_deref())?;
        let mut client = GeminiClient::new(
            &api_key,
            Duration::from_secs(config.provider.timeout_secs),
        )?;
        if let Some(url) = &config.provider.base_url {
            client = client.with_base_url(url.as_str());
        }

        info!(
            simple = %config.models.simple,
            medium = %config.models.medium,
            advanced = %config.models.advanced,
            "gemini gateway initialized"
        );

        Ok(Self::with_client(client, config.models.clone()))
    }

    fn with_client(client: GeminiClient, models: ModelsConfig) -> Self {
        Self { client, models }
    }

    /// Output-token ceiling for `model`, if it is bound to a tier.
    fn max_tokens_for_model(&self, model: &str) -> Option<u32> {
        ComplexityTier::ALL
            .into_iter()
            .find(|&tier| self.models.model_for(tier) == model)
            .map(|tier| self.models.max_tokens_for(tier))
    }

    async fn request(
        &self,
        prompt: &str,
        model: &str,
        max_output_tokens: Option<u32>,
    ) -> Result<String, SwitchyardError> {
        let request = GenerateContentRequest::user_prompt(prompt, max_output_tokens);
        let response = self.client.generate_content(model, &request).await?;

        match response.text() {
            Some(text) => {
                debug!(model, chars = text.chars().count(), "gemini response text");
                Ok(text)
            }
            None => Err(SwitchyardError::Provider {
                message: match response.block_reason() {
                    Some(reason) => format!("{model} blocked the prompt: {reason}"),
                    None => format!("{model} returned no text"),
                },
                source: None,
            }),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self, tier: ComplexityTier) -> &str {
        self.models.model_for(tier)
    }

    fn models(&self) -> Vec<ModelInfo> {
        ComplexityTier::ALL
            .into_iter()
            .map(|tier| ModelInfo {
                tier,
                name: self.models.model_for(tier).to_string(),
                max_output_tokens: self.models.max_tokens_for(tier),
            })
            .collect()
    }

    async fn generate_with_model(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, SwitchyardError> {
        self.request(prompt, model, self.max_tokens_for_model(model)).await
    }

    async fn generate(&self, prompt: &str, tier: ComplexityTier) -> Result<String, SwitchyardError> {
        self.request(
            prompt,
            self.models.model_for(tier),
            Some(self.models.max_tokens_for(tier)),
        )
        .await
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: Option<&str>) -> Result<String, SwitchyardError> {
    select_api_key(config_key, std::env::var(API_KEY_ENV).ok())
}

/// Config key wins over the environment; empty values count as unset.
fn select_api_key(
    config_key: Option<&str>,
    env_key: Option<String>,
) -> Result<String, SwitchyardError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }

    match env_key {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(SwitchyardError::Config(format!(
            "Gemini API key not found. Set provider.api_key in config or the {API_KEY_ENV} \
             environment variable, or use provider.name = \"mock\"."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> GeminiGateway {
        let mut config = RouterConfig::default();
        config.provider.api_key = Some("test-key".to_string());
        config.provider.base_url = Some(server.uri());
        GeminiGateway::new(&config).unwrap()
    }

    fn text_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        })
    }

    #[test]
    fn resolve_api_key_from_config() {
        assert_eq!(resolve_api_key(Some("key-123")).unwrap(), "key-123");
    }

    #[test]
    fn resolve_api_key_empty_config_falls_back_to_env() {
        let result = resolve_api_key(Some(""));
        // Succeeds only when GEMINI_API_KEY is set; never yields an empty key.
        match result {
            Ok(key) => assert!(!key.is_empty()),
            Err(err) => assert!(err.to_string().contains("API key not found"), "got: {err}"),
        }
    }

    #[test]
    fn config_key_wins_over_env() {
        let key = select_api_key(Some("from-config"), Some("from-env".into())).unwrap();
        assert_eq!(key, "from-config");
        let key = select_api_key(Some(""), Some("from-env".into())).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn missing_key_error_carries_the_hint() {
        let err = select_api_key(None, Some(String::new())).unwrap_err();
        assert!(matches!(err, SwitchyardError::Config(_)));
        let message = err.to_string();
        assert!(message.contains(API_KEY_ENV), "got: {message}");
        assert!(message.contains("provider.name = \"mock\""), "got: {message}");
    }

    #[tokio::test]
    async fn generate_uses_tier_model_and_token_ceiling() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-pro:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": {"maxOutputTokens": 8192}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Deep answer.")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let text = gateway.generate("Why?", ComplexityTier::Advanced).await.unwrap();
        assert_eq!(text, "Deep answer.");
    }

    #[tokio::test]
    async fn generate_with_unbound_model_sends_no_ceiling() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash-002:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("medium")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        assert_eq!(gateway.max_tokens_for_model("gemini-1.5-flash-002"), None);
        let text = gateway
            .generate_with_model("classify me", "gemini-1.5-flash-002")
            .await
            .unwrap();
        assert_eq!(text, "medium");
    }

    #[tokio::test]
    async fn blocked_prompt_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway.generate("q", ComplexityTier::Simple).await.unwrap_err();
        assert!(matches!(err, SwitchyardError::Provider { .. }));
        assert!(err.to_string().contains("SAFETY"), "got: {err}");
    }

    #[test]
    fn models_follow_configuration() {
        let mut config = RouterConfig::default();
        config.provider.api_key = Some("k".to_string());
        config.models.medium = "custom-medium".to_string();
        let gateway = GeminiGateway::new(&config).unwrap();

        assert_eq!(gateway.model_name(ComplexityTier::Medium), "custom-medium");
        let models = gateway.models();
        assert_eq!(models.len(), 3);
        assert_eq!(models[0].name, "gemini-1.5-flash-latest");
        assert_eq!(models[0].max_output_tokens, 2048);
        assert_eq!(models[1].max_output_tokens, 4096);
    }
}
