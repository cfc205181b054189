// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchyard - route queries to the cheapest adequate model tier.
//!
//! This is the binary entry point for the Switchyard CLI.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod cache;
mod gateway;
mod query;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use switchyard_cache::ResponseCache;
use switchyard_config::RouterConfig;
use switchyard_core::SwitchyardError;
use switchyard_router::RoutingEngine;

/// Switchyard - route queries to the cheapest adequate model tier.
#[derive(Parser, Debug)]
#[command(name = "switchyard", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single query and print the response.
    Query {
        /// The query text.
        text: String,
        /// Skip the cache for this query (no lookup, no write).
        #[arg(long)]
        no_cache: bool,
        /// Print the full routing result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Launch an interactive REPL session.
    Shell,
    /// List the model bound to each tier.
    Models,
    /// Inspect or clear the response cache.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Subcommand, Debug)]
enum CacheAction {
    /// Show entry counts and the cache location.
    Stats,
    /// Delete every cached response.
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => switchyard_config::load_and_validate_path(path),
        None => switchyard_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            switchyard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    if let Err(e) = run(cli.command, config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>, config: RouterConfig) -> Result<(), SwitchyardError> {
    match command {
        Some(Commands::Query {
            text,
            no_cache,
            json,
        }) => {
            let engine = build_engine(&config)?;
            query::run_query(&engine, &text, !no_cache, json).await
        }
        Some(Commands::Shell) => {
            let engine = build_engine(&config)?;
            shell::run_shell(&engine).await
        }
        Some(Commands::Models) => {
            let gateway = gateway::build_gateway(&config)?;
            gateway::print_models(gateway.as_ref());
            Ok(())
        }
        Some(Commands::Cache { action }) => {
            let cache = ResponseCache::open(&config.cache)?;
            match action {
                CacheAction::Stats => cache::print_stats(&cache),
                CacheAction::Clear => cache::clear(&cache),
            }
        }
        Some(Commands::Config) => {
            let rendered = config
                .to_toml()
                .map_err(|e| SwitchyardError::Config(format!("failed to render configuration: {e}")))?;
            print!("{rendered}");
            Ok(())
        }
        None => {
            println!("switchyard: use --help for available commands");
            Ok(())
        }
    }
}

/// Wire the configured gateway and the on-disk cache into an engine.
fn build_engine(config: &RouterConfig) -> Result<RoutingEngine, SwitchyardError> {
    let gateway = gateway::build_gateway(config)?;
    let cache = Arc::new(ResponseCache::open(&config.cache)?);
    Ok(RoutingEngine::new(config, gateway, cache))
}

/// Initialize the tracing subscriber with an EnvFilter.
///
/// Logs go to stderr so query output on stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("switchyard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
