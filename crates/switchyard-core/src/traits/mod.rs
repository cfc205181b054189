// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! Traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod gateway;

pub use gateway::ModelGateway;
