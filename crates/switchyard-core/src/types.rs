// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifier, cache, gateways and routing engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Capability/cost level of the underlying generation backend.
///
/// Ordered `Simple < Medium < Advanced`, which is also the escalation path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Cheap, fast model for short factual lookups.
    Simple,
    /// General-purpose model.
    Medium,
    /// Most capable (and most expensive) model.
    Advanced,
}

impl ComplexityTier {
    /// All tiers in escalation order.
    pub const ALL: [ComplexityTier; 3] = [
        ComplexityTier::Simple,
        ComplexityTier::Medium,
        ComplexityTier::Advanced,
    ];

    /// The next tier on the escalation path, or `None` at the top.
    pub fn upgrade(self) -> Option<ComplexityTier> {
        match self {
            ComplexityTier::Simple => Some(ComplexityTier::Medium),
            ComplexityTier::Medium => Some(ComplexityTier::Advanced),
            ComplexityTier::Advanced => None,
        }
    }

    /// Lower-case label used in cache records and results.
    pub fn as_str(self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Medium => "medium",
            ComplexityTier::Advanced => "advanced",
        }
    }
}

/// Description of the model a gateway serves for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Tier this model is bound to.
    pub tier: ComplexityTier,
    /// Provider-specific model identifier.
    pub name: String,
    /// Upper bound on generated tokens for this tier.
    pub max_output_tokens: u32,
}

/// The unified record returned by every `route` call.
///
/// `complexity` is always the original classification label; `model` is the
/// model that actually produced `response`, which differs after an escalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// The query exactly as the caller passed it.
    pub query: String,
    /// Final response text (possibly a best-effort invalid response).
    pub response: String,
    /// Original complexity label (`simple`, `medium`, `advanced`, or a
    /// legacy cache label such as `unknown`).
    pub complexity: String,
    /// Model identifier that produced the response.
    #[serde(rename = "final_model", alias = "model")]
    pub model: String,
    /// Whether the response was served from the cache.
    pub cached: bool,
    /// Seconds since the Unix epoch. For cache hits, the time the entry was written.
    pub timestamp: f64,
    /// Number of tier escalations performed for this call.
    #[serde(default)]
    pub escalations: u32,
}

impl RoutingResult {
    /// Parses the complexity label back into a tier, if it is one.
    pub fn complexity_tier(&self) -> Option<ComplexityTier> {
        self.complexity.parse().ok()
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
