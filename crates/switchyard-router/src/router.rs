// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing with caching, validation and bounded tier escalation.
//!
//! Orchestrates a single query: cache lookup > classify > generate > validate
//! (escalating on failure) > persist.

use std::sync::Arc;

use switchyard_cache::ResponseCache;
use switchyard_config::model::{ClassifierMethod, RouterConfig};
use switchyard_core::{unix_timestamp, ComplexityTier, ModelGateway, RoutingResult, SwitchyardError};
use tracing::{debug, info, warn};

use crate::classifier::{ClassificationResult, QueryClassifier};
use crate::llm::LlmClassifier;
use crate::validator::ResponseValidator;

/// How queries get their complexity tier.
enum Strategy {
    Rules(QueryClassifier),
    Llm(LlmClassifier),
}

impl Strategy {
    async fn classify(&self, query: &str) -> Result<ClassificationResult, SwitchyardError> {
        match self {
            Strategy::Rules(rules) => Ok(rules.classify(query)),
            Strategy::Llm(llm) => llm.classify(query).await,
        }
    }
}

/// Outcome of the generate/validate loop.
struct Generated {
    response: String,
    tier: ComplexityTier,
    escalations: u32,
}

/// Routes queries to the cheapest adequate tier.
///
/// The engine is immutable after construction apart from the cache, which
/// synchronizes internally, so one engine may serve concurrent queries.
pub struct RoutingEngine {
    strategy: Strategy,
    validator: ResponseValidator,
    gateway: Arc<dyn ModelGateway>,
    cache: Arc<ResponseCache>,
    fallback_enabled: bool,
    max_retries: u32,
}

impl RoutingEngine {
    /// Build an engine from configuration, a gateway, and an opened cache.
    pub fn new(
        config: &RouterConfig,
        gateway: Arc<dyn ModelGateway>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        let strategy = match config.classifier.method {
            ClassifierMethod::RuleBased => Strategy::Rules(QueryClassifier::new(&config.classifier)),
            ClassifierMethod::Llm => {
                let llm = LlmClassifier::new(&config.classifier, Arc::clone(&gateway));
                debug!(route_model = llm.model(), "classifying with routing model");
                Strategy::Llm(llm)
            }
        };

        Self {
            strategy,
            validator: ResponseValidator::new(&config.fallback),
            gateway,
            cache,
            fallback_enabled: config.fallback.enabled,
            max_retries: config.fallback.max_retries,
        }
    }

    pub fn gateway(&self) -> &Arc<dyn ModelGateway> {
        &self.gateway
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// Answer `query`, from the cache when possible.
    ///
    /// `use_cache = false` bypasses both lookup and persistence for this call.
    /// The reported complexity is always the original classification even
    /// when a higher tier produced the response.
    pub async fn route(&self, query: &str, use_cache: bool) -> Result<RoutingResult, SwitchyardError> {
        let use_cache = use_cache && self.cache.is_enabled();

        if use_cache && let Some(entry) = self.cache.get(query) {
            debug!(model = %entry.model, complexity = %entry.complexity, "cache hit");
            return Ok(RoutingResult {
                query: query.to_string(),
                response: entry.response,
                complexity: entry.complexity,
                model: entry.model,
                cached: true,
                timestamp: entry.timestamp,
                escalations: 0,
            });
        }

        if use_cache {
            debug!("cache miss");
        }

        let classification = self.strategy.classify(query).await?;
        info!(
            tier = %classification.tier,
            reason = classification.reason,
            "query classified"
        );

        let generated = self.generate_validated(query, classification.tier).await?;
        let model = self.gateway.model_name(generated.tier).to_string();
        let complexity = classification.tier.as_str();

        if use_cache {
            self.cache.set(query, &generated.response, &model, complexity)?;
        }

        Ok(RoutingResult {
            query: query.to_string(),
            response: generated.response,
            complexity: complexity.to_string(),
            model,
            cached: false,
            timestamp: unix_timestamp(),
            escalations: generated.escalations,
        })
    }

    /// Generate at `initial`, escalating one tier at a time while the
    /// response is rejected or the call fails.
    ///
    /// At most `max_retries` escalations happen. A rejected response that
    /// cannot be escalated is returned as the best available answer; a
    /// failure that cannot be escalated is an error.
    async fn generate_validated(
        &self,
        query: &str,
        initial: ComplexityTier,
    ) -> Result<Generated, SwitchyardError> {
        let mut tier = initial;
        let mut escalations = 0u32;

        loop {
            let next = tier
                .upgrade()
                .filter(|_| self.fallback_enabled && escalations < self.max_retries);

            match self.gateway.generate(query, tier).await {
                Ok(response) => match self.validator.check(&response) {
                    Ok(()) => {
                        return Ok(Generated {
                            response,
                            tier,
                            escalations,
                        });
                    }
                    Err(rejection) => match next {
                        Some(upgraded) => {
                            info!(from = %tier, to = %upgraded, %rejection, "escalating after rejected response");
                            tier = upgraded;
                            escalations += 1;
                        }
                        None => {
                            warn!(%tier, %rejection, "no escalation left, returning rejected response");
                            return Ok(Generated {
                                response,
                                tier,
                                escalations,
                            });
                        }
                    },
                },
                Err(err) => {
                    if !self.fallback_enabled {
                        return Err(SwitchyardError::Generation {
                            tier,
                            message: err.to_string(),
                            source: Some(Box::new(err)),
                        });
                    }
                    match next {
                        Some(upgraded) => {
                            warn!(from = %tier, to = %upgraded, error = %err, "escalating after generation failure");
                            tier = upgraded;
                            escalations += 1;
                        }
                        None => {
                            return Err(SwitchyardError::NoFallbackAvailable {
                                tier,
                                message: format!(
                                    "generation failed after {escalations} escalation(s): {err}"
                                ),
                            });
                        }
                    }
                }
            }
        }
    }
}
