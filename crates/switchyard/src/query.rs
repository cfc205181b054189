// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard query` command implementation.

use colored::Colorize;
use switchyard_core::{RoutingResult, SwitchyardError};
use switchyard_router::RoutingEngine;

/// Route one query and print the result.
pub async fn run_query(
    engine: &RoutingEngine,
    text: &str,
    use_cache: bool,
    json: bool,
) -> Result<(), SwitchyardError> {
    let result = engine.route(text, use_cache).await?;
    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|e| SwitchyardError::Config(format!("failed to render result: {e}")))?;
        println!("{rendered}");
    } else {
        print_result(&result);
    }
    Ok(())
}

/// Human-readable rendering shared with the shell.
pub fn print_result(result: &RoutingResult) {
    println!("{}", result.response);
    println!("{}", summary_line(result).dimmed());
}

/// One-line routing summary, e.g. `[simple -> mock-medium, 1 escalation]`.
pub fn summary_line(result: &RoutingResult) -> String {
    let mut parts = vec![format!("{} -> {}", result.complexity, result.model)];
    if result.cached {
        parts.push("cached".to_string());
    }
    match result.escalations {
        0 => {}
        1 => parts.push("1 escalation".to_string()),
        n => parts.push(format!("{n} escalations")),
    }
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(cached: bool, escalations: u32) -> RoutingResult {
        RoutingResult {
            query: "q".to_string(),
            response: "r".to_string(),
            complexity: "simple".to_string(),
            model: "mock-medium".to_string(),
            cached,
            timestamp: 0.0,
            escalations,
        }
    }

    #[test]
    fn summary_line_variants() {
        assert_eq!(summary_line(&result(false, 0)), "[simple -> mock-medium]");
        assert_eq!(summary_line(&result(true, 0)), "[simple -> mock-medium, cached]");
        assert_eq!(
            summary_line(&result(false, 1)),
            "[simple -> mock-medium, 1 escalation]"
        );
        assert_eq!(
            summary_line(&result(false, 2)),
            "[simple -> mock-medium, 2 escalations]"
        );
    }
}
