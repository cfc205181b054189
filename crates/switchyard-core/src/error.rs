// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchyard routing engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ComplexityTier;

/// The primary error type used across gateways, the cache, and the routing engine.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// Configuration errors (unknown provider or tier, missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// A model backend failed (transport, auth, quota, malformed response).
    ///
    /// Returned by [`ModelGateway`](crate::ModelGateway) implementations.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A generation call failed at a specific tier and no fallback was enabled.
    #[error("generation failed at {tier} tier: {message}")]
    Generation {
        tier: ComplexityTier,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generation kept failing and escalation could not continue, either
    /// because the top tier was reached or the retry budget ran out.
    #[error("no fallback available from {tier} tier: {message}")]
    NoFallbackAvailable {
        tier: ComplexityTier,
        message: String,
    },

    /// The durable cache store could not be read, parsed, or written.
    #[error("cache I/O error at {}: {message}", path.display())]
    CacheIo {
        path: PathBuf,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The LLM-backed classifier could not reach its model.
    #[error("classification failed: {message}")]
    Classification {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SwitchyardError {
    /// Builds a [`SwitchyardError::CacheIo`] from any error source.
    pub fn cache_io<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CacheIo {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true for errors that originate in a model backend call.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::Provider { .. } | Self::Generation { .. } | Self::NoFallbackAvailable { .. }
        )
    }
}
