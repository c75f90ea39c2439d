// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rota_core::Month;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Roster:
  show        Show the month grid
  stats       Show per-worker shift counts
  edit        Edit the grid interactively
  assign      Fill the month with the auto-assign solver
  worker      List or add workers

Sharing:
  share       Print a view-only entry string
";

const QUICKSTART_HELP: &str = "\
Get started:
  rota show                     Show the current month
  rota show -m 2024-04          Show April 2024
  rota edit                     Click cells, then save
  rota assign --min-day 3       Fill unassigned cells
  rota --entry \"$(rota share)\" show   Open the grid read-only";

#[derive(Parser)]
#[command(name = "rota", version)]
#[command(about = "Monthly shift roster editor backed by a remote roster store")]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Config file (default: $ROTA_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Roster store URL, overrides server_url from the config
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// View-only: the grid can be browsed but not changed
    #[arg(long, global = true)]
    pub view: bool,

    /// Entry string; `mode=view` in its query makes the session view-only
    #[arg(long, global = true, value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the month grid
    #[command(after_help = "Examples:\n  \
        rota show                      Current month\n  \
        rota show -m 2024-02           February 2024\n  \
        rota show -f json              Grid snapshot as JSON")]
    Show {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<Month>,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show per-worker shift counts for a month
    Stats {
        /// Month to count (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<Month>,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Edit the grid interactively
    #[command(after_help = "Type 'help' at the prompt for the list of commands.")]
    Edit {
        /// Month to open (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<Month>,
    },

    /// Fill unassigned cells of a month with the auto-assign solver
    #[command(after_help = "Examples:\n  \
        rota assign                        Use the configured minimums\n  \
        rota assign -m 2024-04 --min-day 3  Three day shifts per day")]
    Assign {
        /// Month to fill (YYYY-MM, default: current month)
        #[arg(long, short)]
        month: Option<Month>,

        /// Minimum day shifts per day (default from config, else 2)
        #[arg(long, allow_negative_numbers = true)]
        min_day: Option<i64>,

        /// Minimum night shifts per day (default from config, else 1)
        #[arg(long, allow_negative_numbers = true)]
        min_night: Option<i64>,
    },

    /// List or add workers
    #[command(subcommand)]
    Worker(WorkerCommand),

    /// Print a view-only entry string for sharing
    Share {
        /// Link to turn into a view-only link (default: share_base from config)
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum WorkerCommand {
    /// List workers in roster order
    List {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Add a worker
    #[command(arg_required_else_help = true)]
    Add {
        /// Display name
        name: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
