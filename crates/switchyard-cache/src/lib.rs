// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable response cache for Switchyard.
//!
//! A single JSON file maps each exact query string to its last response, the
//! model that produced it, and the original complexity label. Entries are
//! never expired; [`ResponseCache::clear`] removes everything at once.

pub mod entry;
pub mod store;

pub use entry::CacheEntry;
pub use store::ResponseCache;
