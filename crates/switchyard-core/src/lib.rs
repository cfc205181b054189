// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Switchyard.
//!
//! This crate provides the error type, shared types, and the
//! [`ModelGateway`] trait used throughout the Switchyard workspace. Every
//! generation backend implements the trait defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwitchyardError;
pub use traits::ModelGateway;
pub use types::{unix_timestamp, ComplexityTier, ModelInfo, RoutingResult};
