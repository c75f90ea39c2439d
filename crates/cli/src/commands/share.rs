// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rota_core::share_link;

use crate::error::Result;

use super::Context;

/// Prints the view-only entry string. Works offline.
pub fn run(ctx: &Context, base: Option<&str>) -> Result<()> {
    let base = base.unwrap_or(&ctx.config.share_base);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", share_link(base))?;
    Ok(())
}
