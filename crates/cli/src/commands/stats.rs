// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rota_core::{Month, StatsRow, WorkerId};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;
use crate::roster::Roster;
use crate::sync::Transport;

use super::{current_month, Context};

#[derive(Serialize)]
struct WorkerStats<'a> {
    worker_id: WorkerId,
    name: &'a str,
    #[serde(flatten)]
    counts: StatsRow,
}

pub async fn run(ctx: &Context, month: Option<Month>, format: OutputFormat) -> Result<()> {
    let month = month.unwrap_or_else(current_month);
    let mut roster = ctx.roster(month);
    let mut stdout = std::io::stdout().lock();
    let result = run_impl(&mut roster, month, format, &mut stdout).await;
    roster.close().await;
    result
}

pub(crate) async fn run_impl<T: Transport>(
    roster: &mut Roster<T>,
    month: Month,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    roster.load_month(month).await?;
    let view = roster.view();
    match format {
        OutputFormat::Json => {
            let rows: Vec<WorkerStats<'_>> = view
                .rows
                .iter()
                .map(|row| WorkerStats {
                    worker_id: row.worker_id,
                    name: &row.name,
                    counts: row.stats,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&rows)?)?;
        }
        OutputFormat::Text => {
            for line in format_stats(&view) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
