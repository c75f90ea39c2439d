// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rota_core::{Constraints, Month};

use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::sync::Transport;

use super::{constraints, current_month, Context, RELOAD_WARNING};

pub async fn run(
    ctx: &Context,
    month: Option<Month>,
    min_day: Option<i64>,
    min_night: Option<i64>,
) -> Result<()> {
    ctx.require_edit()?;
    let constraints = constraints(&ctx.config, min_day, min_night)?;
    let month = month.unwrap_or_else(current_month);
    let mut roster = ctx.roster(month);
    let mut stdout = std::io::stdout().lock();
    let result = run_impl(&mut roster, month, constraints, &mut stdout).await;
    roster.close().await;
    result
}

/// Loads `month`, runs the solver and prints its message with the
/// refreshed stats. If the reload fails the stats are from before the run.
pub(crate) async fn run_impl<T: Transport>(
    roster: &mut Roster<T>,
    month: Month,
    constraints: Constraints,
    out: &mut impl Write,
) -> Result<()> {
    roster.load_month(month).await?;
    let assigned = roster
        .editor()
        .ok_or(Error::ViewOnly)?
        .auto_assign(constraints)
        .await?;
    writeln!(out, "{}", assigned.message)?;
    if !assigned.refreshed {
        writeln!(out, "{}", RELOAD_WARNING)?;
    }
    for line in crate::display::format_stats(&roster.view()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
