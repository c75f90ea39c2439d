// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rota-core operations.

use thiserror::Error;

/// All possible errors that can occur in rota-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid month: {0}\n  hint: months are numbered 1 through 12")]
    InvalidMonth(u32),

    #[error("invalid year: {0}")]
    InvalidYear(i32),

    #[error("invalid month '{0}'\n  hint: use the YYYY-MM format, e.g. 2024-04")]
    InvalidMonthSpec(String),

    #[error("invalid date '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("day {day} is outside {month} (1..={days})")]
    DayOutOfRange { month: String, day: u32, days: u32 },

    #[error(
        "invalid shift: '{0}'\n  hint: valid shifts are: Empty, Holiday, Off, Day, Night"
    )]
    InvalidShift(String),

    #[error("invalid constraint {field}: {value}\n  hint: constraints are non-negative integers")]
    InvalidConstraint { field: &'static str, value: i64 },

    #[error("the grid for {0} is still loading")]
    LoadPending(String),

    #[error("no cell for worker {worker} on {date}")]
    CellNotFound { worker: String, date: String },

    #[error("an auto-assign request is already in progress")]
    AssignInProgress,
}

/// A specialized Result type for rota-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
