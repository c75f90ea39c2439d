// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The roster grid: one row per worker, one column per day.
//!
//! The grid is the single source of truth for cell state. It is rebuilt
//! from scratch for every month change or roster change and never patched
//! across months.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::calendar::{Column, Month};
use crate::record::{DateRange, ScheduleRecord};
use crate::shift::Shift;
use crate::worker::{Worker, WorkerId};

/// Composite address of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey {
    pub worker_id: WorkerId,
    pub date: NaiveDate,
}

impl CellKey {
    pub fn new(worker_id: WorkerId, date: NaiveDate) -> Self {
        CellKey { worker_id, date }
    }
}

/// A single roster cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub key: CellKey,
    pub shift: Shift,
}

/// One worker's row of cells, ordered by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub worker: Worker,
    pub cells: Vec<Cell>,
}

/// Outcome of merging a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Records written to a cell.
    pub applied: usize,
    /// Records addressing no cell (unknown worker, date outside the month,
    /// or unparsable date).
    pub dropped: usize,
    /// Records whose designation was outside the vocabulary and was stored
    /// as `Empty`.
    pub normalized: usize,
}

/// In-memory cell matrix for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    month: Month,
    columns: Vec<Column>,
    rows: Vec<Row>,
    index: HashMap<WorkerId, usize>,
}

impl Grid {
    /// Builds an all-`Empty` grid for `workers` over every day of `month`.
    ///
    /// A worker id that appears twice keeps only its first row, so each
    /// (worker, date) pair maps to exactly one cell.
    pub fn build(workers: &[Worker], month: Month) -> Self {
        let columns = month.columns();
        let mut rows = Vec::with_capacity(workers.len());
        let mut index = HashMap::with_capacity(workers.len());

        for worker in workers {
            if index.contains_key(&worker.id) {
                debug!(worker = %worker.id, "skipping duplicate worker in roster");
                continue;
            }
            let cells = columns
                .iter()
                .map(|column| Cell {
                    key: CellKey::new(worker.id, column.date),
                    shift: Shift::Empty,
                })
                .collect();
            index.insert(worker.id, rows.len());
            rows.push(Row {
                worker: worker.clone(),
                cells,
            });
        }

        Grid {
            month,
            columns,
            rows,
            index,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Workers in row order.
    pub fn workers(&self) -> impl Iterator<Item = &Worker> {
        self.rows.iter().map(|row| &row.worker)
    }

    /// Inclusive date range covered by the columns.
    pub fn range(&self) -> DateRange {
        DateRange::month(self.month)
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    pub fn contains(&self, key: CellKey) -> bool {
        self.position(key).is_some()
    }

    /// Current designation of a cell, if it exists.
    pub fn get(&self, worker_id: WorkerId, date: NaiveDate) -> Option<Shift> {
        self.position(CellKey::new(worker_id, date))
            .map(|(row, col)| self.rows[row].cells[col].shift)
    }

    fn position(&self, key: CellKey) -> Option<(usize, usize)> {
        if !self.month.contains(key.date) {
            return None;
        }
        let row = *self.index.get(&key.worker_id)?;
        // Columns are one per day starting at day 1.
        let col = key.date.day0() as usize;
        Some((row, col))
    }

    /// Overwrites a cell. A key outside the grid is ignored.
    ///
    /// Returns whether a cell was written.
    pub fn set_shift(&mut self, worker_id: WorkerId, date: NaiveDate, shift: Shift) -> bool {
        match self.position(CellKey::new(worker_id, date)) {
            Some((row, col)) => {
                self.rows[row].cells[col].shift = shift;
                true
            }
            None => false,
        }
    }

    /// Advances a cell one step along the shift cycle.
    ///
    /// Returns the new designation, or `None` if the key is not in the grid.
    pub fn cycle(&mut self, key: CellKey) -> Option<Shift> {
        let (row, col) = self.position(key)?;
        let cell = &mut self.rows[row].cells[col];
        cell.shift = cell.shift.next();
        Some(cell.shift)
    }

    /// Applies a batch of stored records with [`Grid::set_shift`].
    pub fn merge(&mut self, records: &[ScheduleRecord]) -> MergeReport {
        let mut report = MergeReport::default();

        for record in records {
            let Some(date) = record.parsed_date() else {
                debug!(date = %record.date, "dropping record with unparsable date");
                report.dropped += 1;
                continue;
            };
            let parsed = record.parsed_shift();
            if self.set_shift(record.worker_id, date, parsed.unwrap_or_default()) {
                report.applied += 1;
                if parsed.is_none() {
                    debug!(shift = %record.shift, "stored unknown shift as Empty");
                    report.normalized += 1;
                }
            } else {
                debug!(worker = %record.worker_id, %date, "dropping record outside grid");
                report.dropped += 1;
            }
        }

        report
    }

    /// Serializes every cell, `Empty` included, for a full-grid save.
    pub fn to_records(&self) -> Vec<ScheduleRecord> {
        self.cells()
            .map(|cell| ScheduleRecord::new(cell.key.worker_id, cell.key.date, cell.shift))
            .collect()
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
