// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query complexity classification and tiered model routing for Switchyard.
//!
//! This crate provides:
//! - [`QueryClassifier`]: Rule-based complexity classification (no model call)
//! - [`LlmClassifier`]: Routing-model classification with rule-based fallback
//! - [`ResponseValidator`]: Heuristic acceptance check for generated text
//! - [`RoutingEngine`]: Cache-aware routing with bounded tier escalation

pub mod classifier;
pub mod llm;
pub mod router;
pub mod validator;

pub use classifier::{ClassificationResult, QueryClassifier};
pub use llm::LlmClassifier;
pub use router::RoutingEngine;
pub use validator::{Rejection, ResponseValidator};
