// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-worker shift counts derived from the grid.
//!
//! Stats are recomputed from scratch after every change. Nothing here is
//! maintained incrementally.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::grid::{Cell, Grid};
use crate::shift::Shift;
use crate::worker::{Worker, WorkerId};

/// Shift counts for one worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsRow {
    pub day: u32,
    pub night: u32,
    pub off: u32,
    pub holiday: u32,
    /// Worked days: `day + night`.
    pub total: u32,
}

impl StatsRow {
    fn count(&mut self, shift: Shift) {
        match shift {
            Shift::Day => self.day += 1,
            Shift::Night => self.night += 1,
            Shift::Off => self.off += 1,
            Shift::Holiday => self.holiday += 1,
            Shift::Empty => {}
        }
        if shift.is_working() {
            self.total += 1;
        }
    }
}

/// Stats for every known worker, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stats {
    rows: BTreeMap<WorkerId, StatsRow>,
}

impl Stats {
    pub fn get(&self, worker_id: WorkerId) -> Option<&StatsRow> {
        self.rows.get(&worker_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WorkerId, &StatsRow)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Counts every cell of `grid` against the `workers` roster.
pub fn compute_stats(grid: &Grid, workers: &[Worker]) -> Stats {
    tally(grid.cells(), workers)
}

/// Counts `cells` in whatever order they arrive.
///
/// Every worker in `workers` gets a row, zeroed if it has no cells. Cells
/// belonging to a worker outside `workers` are ignored.
fn tally<'a>(cells: impl IntoIterator<Item = &'a Cell>, workers: &[Worker]) -> Stats {
    let mut rows: BTreeMap<WorkerId, StatsRow> = workers
        .iter()
        .map(|worker| (worker.id, StatsRow::default()))
        .collect();

    for cell in cells {
        if let Some(row) = rows.get_mut(&cell.key.worker_id) {
            row.count(cell.shift);
        }
    }

    Stats { rows }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
