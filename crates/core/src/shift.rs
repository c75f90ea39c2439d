// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The shift vocabulary and its click cycle.
//!
//! A cell always holds exactly one [`Shift`]. Interactive edits move a cell
//! one step along the fixed cycle:
//!
//! ```text
//! Empty → Holiday → Off → Day → Night → Empty
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Shift designation held by a single roster cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// Nothing scheduled. Default for every cell.
    #[default]
    Empty,
    /// Planned leave.
    Holiday,
    /// Rest day.
    Off,
    /// Day shift.
    Day,
    /// Night shift.
    Night,
}

impl Shift {
    /// The vocabulary in cycle order.
    pub const CYCLE: [Shift; 5] = [
        Shift::Empty,
        Shift::Holiday,
        Shift::Off,
        Shift::Day,
        Shift::Night,
    ];

    /// Returns the wire literal for this shift.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Empty => "Empty",
            Shift::Holiday => "Holiday",
            Shift::Off => "Off",
            Shift::Day => "Day",
            Shift::Night => "Night",
        }
    }

    /// Parses an exact wire literal. Spelling is part of the contract, so
    /// this is case-sensitive.
    pub fn from_wire(s: &str) -> Option<Shift> {
        Shift::CYCLE.into_iter().find(|shift| shift.as_str() == s)
    }

    /// Position of this shift in [`Shift::CYCLE`].
    pub fn index(&self) -> usize {
        match self {
            Shift::Empty => 0,
            Shift::Holiday => 1,
            Shift::Off => 2,
            Shift::Day => 3,
            Shift::Night => 4,
        }
    }

    /// The successor in the click cycle.
    pub fn next(&self) -> Shift {
        Shift::CYCLE[(self.index() + 1) % Shift::CYCLE.len()]
    }

    /// Returns true for the shifts that count as worked days.
    pub fn is_working(&self) -> bool {
        matches!(self, Shift::Day | Shift::Night)
    }

    /// One-letter code for compact grid output.
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Empty => ".",
            Shift::Holiday => "H",
            Shift::Off => "O",
            Shift::Day => "D",
            Shift::Night => "N",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shift {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Shift::from_wire(s).ok_or_else(|| Error::InvalidShift(s.to_string()))
    }
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
