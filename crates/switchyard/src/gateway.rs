// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway selection from `provider.name`.

use std::sync::Arc;

use colored::Colorize;
use switchyard_config::RouterConfig;
use switchyard_core::{ModelGateway, SwitchyardError};
use switchyard_mock::MockGateway;
use tracing::info;

/// Build the gateway named by `provider.name`.
pub fn build_gateway(config: &RouterConfig) -> Result<Arc<dyn ModelGateway>, SwitchyardError> {
    let gateway: Arc<dyn ModelGateway> = match config.provider.name.as_str() {
        "mock" => Arc::new(MockGateway::new()),
        #[cfg(feature = "gemini")]
        "gemini" => Arc::new(switchyard_gemini::GeminiGateway::new(config)?),
        other => {
            return Err(SwitchyardError::Config(format!(
                "unknown or disabled provider `{other}`"
            )));
        }
    };
    info!(provider = gateway.name(), "gateway ready");
    Ok(gateway)
}

/// Print the tier-to-model table.
pub fn print_models(gateway: &dyn ModelGateway) {
    println!("{} {}", "provider:".bold(), gateway.name());
    for model in gateway.models() {
        println!(
            "  {:<9} {}  {}",
            model.tier.to_string().cyan(),
            model.name,
            format!("(max {} tokens)", model.max_output_tokens).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchyard_core::ComplexityTier;

    #[test]
    fn mock_provider_needs_no_credentials() {
        let mut config = RouterConfig::default();
        config.provider.name = "mock".to_string();
        let gateway = build_gateway(&config).unwrap();
        assert_eq!(gateway.name(), "mock");
        assert_eq!(gateway.model_name(ComplexityTier::Simple), "mock-simple");
    }

    #[test]
    fn unknown_provider_is_config_error() {
        let mut config = RouterConfig::default();
        config.provider.name = "bogus".to_string();
        let err = build_gateway(&config).err().expect("unknown provider must fail");
        assert!(matches!(err, SwitchyardError::Config(_)));
        assert!(err.to_string().contains("bogus"));
    }

    #[cfg(feature = "gemini")]
    #[test]
    fn gemini_provider_with_key_builds() {
        let mut config = RouterConfig::default();
        config.provider.api_key = Some("test-key".to_string());
        let gateway = build_gateway(&config).unwrap();
        assert_eq!(gateway.name(), "gemini");
        assert_eq!(gateway.models().len(), 3);
    }
}
