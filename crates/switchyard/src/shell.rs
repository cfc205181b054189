// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Every line is routed through the same engine, so repeated questions are
//! answered from the cache.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use switchyard_core::SwitchyardError;
use switchyard_router::RoutingEngine;

use crate::gateway::print_models;
use crate::query::print_result;

/// A parsed line of shell input.
#[derive(Debug, PartialEq, Eq)]
enum ShellInput<'a> {
    Exit,
    Help,
    Models,
    ClearCache,
    Unknown(&'a str),
    Query(&'a str),
    Empty,
}

fn parse_input(line: &str) -> ShellInput<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => ShellInput::Empty,
        "/exit" | "/quit" => ShellInput::Exit,
        "/help" => ShellInput::Help,
        "/models" => ShellInput::Models,
        "/clear-cache" => ShellInput::ClearCache,
        cmd if cmd.starts_with('/') => ShellInput::Unknown(cmd),
        query => ShellInput::Query(query),
    }
}

/// Runs the `switchyard shell` interactive REPL.
pub async fn run_shell(engine: &RoutingEngine) -> Result<(), SwitchyardError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| SwitchyardError::Config(format!("failed to initialize readline: {e}")))?;

    println!("{}", "switchyard shell".bold().green());
    println!("Type {} for commands, {} to exit.\n", "/help".yellow(), "/exit".yellow());

    let prompt = format!("{}> ", "switchyard".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = parse_input(&line);
                if input != ShellInput::Empty {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match input {
                    ShellInput::Empty => continue,
                    ShellInput::Exit => break,
                    ShellInput::Help => print_help(),
                    ShellInput::Models => print_models(engine.gateway().as_ref()),
                    ShellInput::ClearCache => match engine.cache().clear() {
                        Ok(()) => println!("{}", "cache cleared".dimmed()),
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    },
                    ShellInput::Unknown(cmd) => {
                        eprintln!("{}: unknown command {cmd}, try /help", "error".red());
                    }
                    ShellInput::Query(query) => match engine.route(query, true).await {
                        Ok(result) => print_result(&result),
                        Err(e) => eprintln!("{}: {e}", "error".red()),
                    },
                }
            }
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("  {}        list the model bound to each tier", "/models".yellow());
    println!("  {}   delete every cached response", "/clear-cache".yellow());
    println!("  {}          leave the shell", "/exit".yellow());
    println!("  anything else is routed as a query");
}
