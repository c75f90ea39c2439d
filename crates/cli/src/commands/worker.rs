// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::display::format_workers;
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::sync::Transport;

use super::{current_month, Context};

pub async fn list(ctx: &Context, format: OutputFormat) -> Result<()> {
    let mut roster = ctx.roster(current_month());
    let mut stdout = std::io::stdout().lock();
    let result = list_impl(&mut roster, format, &mut stdout).await;
    roster.close().await;
    result
}

pub(crate) async fn list_impl<T: Transport>(
    roster: &mut Roster<T>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let workers = roster.list_workers().await?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&workers)?)?,
        OutputFormat::Text => {
            for line in format_workers(&workers) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

pub async fn add(ctx: &Context, name: &str) -> Result<()> {
    ctx.require_edit()?;
    let mut roster = ctx.roster(current_month());
    let mut stdout = std::io::stdout().lock();
    let result = add_impl(&mut roster, name, &mut stdout).await;
    roster.close().await;
    result
}

pub(crate) async fn add_impl<T: Transport>(
    roster: &mut Roster<T>,
    name: &str,
    out: &mut impl Write,
) -> Result<()> {
    let worker = roster
        .editor()
        .ok_or(Error::ViewOnly)?
        .add_worker(name)
        .await?;
    writeln!(out, "Added {} ({})", worker.name, worker.id)?;
    Ok(())
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
