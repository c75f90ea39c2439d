// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rotars - a monthly shift roster client.
//!
//! This crate provides the `rota` CLI: it loads one month of shift records
//! from a roster store over a WebSocket, renders them as a worker-by-day
//! grid, and lets editors cycle cells, save, add workers and trigger the
//! store's auto-assign solver.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing
//! - [`Config`] - Store address, timeouts and solver defaults
//! - [`roster`] - A month session bound to a store client
//! - [`sync`] - The request/response client and its transport
//! - [`Error`] - Error types for all operations
//!
//! Grid semantics (cycling, merging, statistics, mode rules) live in
//! `rota_core`, which does no IO.

mod cli;
pub mod colors;
mod commands;
mod display;
mod mode;

pub mod config;
pub mod error;
pub mod roster;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat, WorkerCommand};
pub use config::Config;
pub use error::{Error, Result};

use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users; it blocks on a single-threaded runtime until the command finishes.
pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli))
}

/// Resolves mode, config and colour from the global flags.
fn context(cli: &Cli) -> Result<Context> {
    let mode = mode::detect(cli.view, cli.entry.as_deref());
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(server) = &cli.server {
        config::validate_server_url(server)?;
        config.server_url = server.clone();
    }
    Ok(Context {
        config,
        mode,
        color: colors::should_colorize(),
    })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = context(&cli)?;
    tracing::debug!("mode {:?}, server {}", ctx.mode, ctx.config.server_url);
    match cli.command {
        Command::Show { month, format } => commands::show::run(&ctx, month, format).await,
        Command::Stats { month, format } => commands::stats::run(&ctx, month, format).await,
        Command::Edit { month } => commands::edit::run(&ctx, month).await,
        Command::Assign {
            month,
            min_day,
            min_night,
        } => commands::assign::run(&ctx, month, min_day, min_night).await,
        Command::Worker(WorkerCommand::List { format }) => {
            commands::worker::list(&ctx, format).await
        }
        Command::Worker(WorkerCommand::Add { name }) => commands::worker::add(&ctx, &name).await,
        Command::Share { base } => commands::share::run(&ctx, base.as_deref()),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
