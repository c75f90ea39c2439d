// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rota_core::Month;

use crate::cli::OutputFormat;
use crate::display::{format_grid, format_legend, format_stats};
use crate::error::Result;
use crate::roster::Roster;
use crate::sync::Transport;

use super::{current_month, Context};

pub async fn run(ctx: &Context, month: Option<Month>, format: OutputFormat) -> Result<()> {
    let month = month.unwrap_or_else(current_month);
    let mut roster = ctx.roster(month);
    let mut stdout = std::io::stdout().lock();
    let result = run_impl(&mut roster, month, format, ctx.color, &mut stdout).await;
    roster.close().await;
    result
}

/// Internal implementation that accepts a roster for testing.
pub(crate) async fn run_impl<T: Transport>(
    roster: &mut Roster<T>,
    month: Month,
    format: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    roster.load_month(month).await?;
    let view = roster.view();
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(&view)?)?;
        }
        OutputFormat::Text => {
            for line in format_grid(&view, color) {
                writeln!(out, "{}", line)?;
            }
            writeln!(out)?;
            for line in format_stats(&view) {
                writeln!(out, "{}", line)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", format_legend())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
