// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard cache` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use switchyard_cache::ResponseCache;
use switchyard_core::SwitchyardError;

/// Print entry counts per complexity label and per model.
pub fn print_stats(cache: &ResponseCache) -> Result<(), SwitchyardError> {
    if !cache.is_enabled() {
        println!("{}", "cache disabled".yellow());
        return Ok(());
    }

    let entries = cache.entries();
    println!("{} {}", "path:".bold(), cache.path().display());
    println!("{} {}", "entries:".bold(), entries.len());

    let (by_complexity, by_model) = tally(&entries);
    if !by_complexity.is_empty() {
        println!("{}", "by complexity:".bold());
        for (label, count) in &by_complexity {
            println!("  {label:<9} {count}");
        }
        println!("{}", "by model:".bold());
        for (model, count) in &by_model {
            println!("  {model} {count}");
        }
    }
    Ok(())
}

/// Delete all cached responses.
pub fn clear(cache: &ResponseCache) -> Result<(), SwitchyardError> {
    if !cache.is_enabled() {
        println!("{}", "cache disabled, nothing to clear".yellow());
        return Ok(());
    }
    let removed = cache.len();
    cache.clear()?;
    println!("cleared {removed} cached response(s)");
    Ok(())
}

type Counts = BTreeMap<String, usize>;

fn tally(entries: &[switchyard_cache::CacheEntry]) -> (Counts, Counts) {
    let mut by_complexity = Counts::new();
    let mut by_model = Counts::new();
    for entry in entries {
        *by_complexity.entry(entry.complexity.clone()).or_default() += 1;
        *by_model.entry(entry.model.clone()).or_default() += 1;
    }
    (by_complexity, by_model)
}
