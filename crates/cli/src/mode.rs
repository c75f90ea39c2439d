// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup mode detection.
//!
//! The mode is read once from the command line and never changes for the
//! rest of the process: `--view`, or an entry string carrying `mode=view`
//! (as printed by `rota share`).

use rota_core::Mode;

/// Either signal is enough to make the session view-only.
pub fn detect(view_flag: bool, entry: Option<&str>) -> Mode {
    let from_entry = entry.map(Mode::from_entry).unwrap_or_default();
    let mode = if view_flag || from_entry.is_view_only() {
        Mode::View
    } else {
        Mode::Edit
    };
    tracing::debug!(%mode, "operating mode");
    mode
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
