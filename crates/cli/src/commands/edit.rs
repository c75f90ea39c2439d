// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive roster editor.
//!
//! A line-driven loop over one [`Roster`]. Each input line is parsed into a
//! [`ReplCommand`] and run to completion before the next line is read, so
//! loads and saves never overlap. In view-only mode the mutating commands
//! are neither listed by `help` nor recognized.

use std::io::Write;

use rota_core::{share_link, Action, Constraints, Mode, Month};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::display::{format_grid, format_legend, format_stats};
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::sync::Transport;

use super::{constraints, current_month, Context, RELOAD_WARNING};

const PROMPT: &str = "rota> ";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Month(Month),
    Next,
    Prev,
    Show,
    Stats,
    Share,
    Help,
    Quit,
    Click { worker: String, day: u32 },
    Save,
    Add(String),
    Assign {
        min_day: Option<i64>,
        min_night: Option<i64>,
    },
}

impl ReplCommand {
    fn action(&self) -> Option<Action> {
        match self {
            ReplCommand::Month(_) | ReplCommand::Next | ReplCommand::Prev => {
                Some(Action::ChangeMonth)
            }
            ReplCommand::Share => Some(Action::Share),
            ReplCommand::Click { .. } => Some(Action::Cycle),
            ReplCommand::Save => Some(Action::Save),
            ReplCommand::Add(_) => Some(Action::AddWorker),
            ReplCommand::Assign { .. } => Some(Action::AutoAssign),
            ReplCommand::Show | ReplCommand::Stats | ReplCommand::Help | ReplCommand::Quit => None,
        }
    }
}

fn parse_count(arg: Option<&str>, usage: &'static str) -> Result<Option<i64>> {
    arg.map(|s| s.parse::<i64>().map_err(|_| Error::Usage(usage)))
        .transpose()
}

/// Parses one line. Blank lines yield `None`.
pub fn parse_line(mode: Mode, line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "month" | "m" => {
            if rest.is_empty() {
                return Err(Error::Usage("month YYYY-MM"));
            }
            ReplCommand::Month(rest.parse()?)
        }
        "next" | "n" => ReplCommand::Next,
        "prev" | "p" => ReplCommand::Prev,
        "show" | "s" => ReplCommand::Show,
        "stats" => ReplCommand::Stats,
        "share" => ReplCommand::Share,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "click" | "c" => {
            const USAGE: &str = "click <worker> <day>";
            let (worker, day) = rest.rsplit_once(char::is_whitespace).ok_or(Error::Usage(USAGE))?;
            let day = day.parse::<u32>().map_err(|_| Error::Usage(USAGE))?;
            ReplCommand::Click {
                worker: worker.trim().to_string(),
                day,
            }
        }
        "save" => ReplCommand::Save,
        "add" => {
            if rest.is_empty() {
                return Err(Error::Usage("add <name>"));
            }
            ReplCommand::Add(rest.to_string())
        }
        "assign" => {
            const USAGE: &str = "assign [min_day] [min_night]";
            let mut args = rest.split_whitespace();
            let min_day = parse_count(args.next(), USAGE)?;
            let min_night = parse_count(args.next(), USAGE)?;
            if args.next().is_some() {
                return Err(Error::Usage(USAGE));
            }
            ReplCommand::Assign { min_day, min_night }
        }
        _ => return Err(Error::UnknownCommand(word.to_string())),
    };

    match command.action() {
        Some(action) if !mode.allows(action) => Err(Error::UnknownCommand(word.to_string())),
        _ => Ok(Some(command)),
    }
}

/// Command list for the current mode.
pub fn help_text(mode: Mode) -> String {
    let mut lines = vec![
        "  month YYYY-MM        Switch month (also: next, prev)",
        "  show                 Redraw the grid",
        "  stats                Per-worker counts",
        "  share                Print the view-only entry string",
    ];
    if mode.allows(Action::Cycle) {
        lines.extend([
            "  click <worker> <day> Advance a cell: . -> H -> O -> D -> N",
            "  save                 Write the whole grid to the store",
            "  add <name>           Add a worker (unsaved clicks are lost)",
            "  assign [day] [night] Auto-assign empty cells",
        ]);
    }
    lines.extend(["  help                 This list", "  quit                 Leave"]);
    lines.join("\n")
}

pub async fn run(ctx: &Context, month: Option<Month>) -> Result<()> {
    let month = month.unwrap_or_else(current_month);
    let mut roster = ctx.roster(month);
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    let result = run_impl(&mut roster, month, &ctx.config, ctx.color, input, &mut stdout).await;
    roster.close().await;
    result
}

/// Runs the loop until `quit` or end of input.
///
/// Only the initial load is fatal. Later failures are printed and the loop
/// continues with the grid as it was.
pub(crate) async fn run_impl<T: Transport, R: AsyncBufRead + Unpin>(
    roster: &mut Roster<T>,
    month: Month,
    config: &Config,
    color: bool,
    input: R,
    out: &mut impl Write,
) -> Result<()> {
    roster.load_month(month).await?;
    draw(roster, color, out)?;

    let mode = roster.mode();
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let command = match parse_line(mode, &line) {
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        if let Err(e) = execute(roster, command, config, color, out).await {
            tracing::debug!("command failed: {:?}", e);
            writeln!(out, "error: {}", e)?;
        }
    }
    Ok(())
}

fn draw<T: Transport>(roster: &Roster<T>, color: bool, out: &mut impl Write) -> Result<()> {
    for line in format_grid(&roster.view(), color) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

async fn execute<T: Transport>(
    roster: &mut Roster<T>,
    command: ReplCommand,
    config: &Config,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ReplCommand::Month(month) => {
            roster.load_month(month).await?;
            draw(roster, color, out)?;
        }
        ReplCommand::Next => {
            let month = roster.month().succ()?;
            roster.load_month(month).await?;
            draw(roster, color, out)?;
        }
        ReplCommand::Prev => {
            let month = roster.month().pred()?;
            roster.load_month(month).await?;
            draw(roster, color, out)?;
        }
        ReplCommand::Show => {
            draw(roster, color, out)?;
            writeln!(out, "{}", format_legend())?;
        }
        ReplCommand::Stats => {
            for line in format_stats(&roster.view()) {
                writeln!(out, "{}", line)?;
            }
        }
        ReplCommand::Share => writeln!(out, "{}", share_link(&config.share_base))?,
        ReplCommand::Help => writeln!(out, "{}", help_text(roster.mode()))?,
        ReplCommand::Quit => {}
        ReplCommand::Click { worker, day } => {
            let worker_id = roster.find_worker(&worker)?;
            let shift = editor(roster)?.cycle(worker_id, day)?;
            writeln!(out, "{} {}-{:02}: {}", worker, roster.month(), day, shift)?;
        }
        ReplCommand::Save => {
            let message = editor(roster)?.save().await?;
            writeln!(out, "{}", message)?;
        }
        ReplCommand::Add(name) => {
            let worker = editor(roster)?.add_worker(&name).await?;
            writeln!(out, "Added {} ({})", worker.name, worker.id)?;
            draw(roster, color, out)?;
        }
        ReplCommand::Assign { min_day, min_night } => {
            let constraints: Constraints = constraints(config, min_day, min_night)?;
            let assigned = editor(roster)?.auto_assign(constraints).await?;
            writeln!(out, "{}", assigned.message)?;
            if !assigned.refreshed {
                writeln!(out, "{}", RELOAD_WARNING)?;
            }
            draw(roster, color, out)?;
        }
    }
    Ok(())
}

fn editor<T: Transport>(roster: &mut Roster<T>) -> Result<crate::roster::RosterEditor<'_, T>> {
    roster.editor().ok_or(Error::ViewOnly)
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
