// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule records as exchanged with the remote store.
//!
//! Records are kept in their wire form (string date, string designation)
//! until they are merged into a grid, so a single malformed record can be
//! dropped without rejecting the whole response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::shift::Shift;
use crate::worker::WorkerId;

/// Wire date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted (worker, date, shift) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "employee_id")]
    pub worker_id: WorkerId,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Shift literal. Anything outside the vocabulary is tolerated on load.
    #[serde(rename = "shift_type")]
    pub shift: String,
}

impl ScheduleRecord {
    pub fn new(worker_id: WorkerId, date: NaiveDate, shift: Shift) -> Self {
        ScheduleRecord {
            worker_id,
            date: date.format(DATE_FORMAT).to_string(),
            shift: shift.as_str().to_string(),
        }
    }

    /// Parsed date, or `None` if the store sent something unparsable.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Parsed designation, or `None` for legacy or corrupt values.
    pub fn parsed_shift(&self) -> Option<Shift> {
        Shift::from_wire(&self.shift)
    }
}

/// Inclusive date range used for schedule queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// First through last day of `month`.
    pub fn month(month: Month) -> Self {
        DateRange {
            start: month.first_day(),
            end: month.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
