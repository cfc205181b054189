// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Switchyard integration tests.
//!
//! Provides a scripted gateway and a throwaway on-disk environment for fast,
//! deterministic, CI-runnable tests without network access.
//!
//! # Components
//!
//! - [`ScriptedGateway`] - Gateway with per-model queued replies and a call log
//! - [`TestEnv`] - Temporary directory plus a config whose cache lives inside it

pub mod env;
pub mod scripted_gateway;

pub use env::TestEnv;
pub use scripted_gateway::{GatewayCall, ScriptedGateway};
