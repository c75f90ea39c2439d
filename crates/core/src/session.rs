// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session state for one roster view.
//!
//! A [`Session`] owns everything a roster screen needs: the mode, the
//! cached roster, the grid and its stats. It performs no I/O. Callers drive
//! loads in two steps:
//!
//! ```text
//! begin_month / begin_refresh ──► LoadTicket ──► (fetch records) ──► apply_load
//! ```
//!
//! Both calls bump the load generation. `begin_month` also discards the
//! grid at once, since the old month must not stay on screen. `begin_refresh`
//! keeps the current grid until [`Session::apply_load`] replaces it, so a
//! refresh whose fetch fails leaves the grid as it was. `apply_load` only
//! accepts records fetched for the current generation; a response for an
//! older ticket is discarded, so the grid always reflects the most recently
//! requested month.
//!
//! Mutation goes through [`Session::editor`], which does not exist in
//! view-only mode.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::Month;
use crate::error::{Error, Result};
use crate::grid::{CellKey, Grid, MergeReport};
use crate::latch::{Latch, LatchGuard};
use crate::mode::Mode;
use crate::protocol::{AutoAssignRequest, Constraints};
use crate::record::{DateRange, ScheduleRecord};
use crate::shift::Shift;
use crate::stats::{compute_stats, Stats};
use crate::worker::{Worker, WorkerId};

/// Handle for one pending load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    month: Month,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Inclusive range to request from the store.
    pub fn range(&self) -> DateRange {
        DateRange::month(self.month)
    }
}

/// Result of [`Session::apply_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Records were merged into the current grid.
    Merged(MergeReport),
    /// The ticket belongs to a superseded load; nothing changed.
    Stale,
}

/// Roster view state.
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    workers: Vec<Worker>,
    grid: Grid,
    stats: Stats,
    generation: u64,
    ready: bool,
    assign: Latch,
}

impl Session {
    /// Creates a session with an empty roster. Nothing is editable until a
    /// load for `month` has been applied.
    pub fn new(mode: Mode, month: Month) -> Self {
        Session {
            mode,
            workers: Vec::new(),
            grid: Grid::build(&[], month),
            stats: Stats::default(),
            generation: 0,
            ready: false,
            assign: Latch::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn month(&self) -> Month {
        self.grid.month()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// True once the latest load has been applied.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// True while an auto-assign request is outstanding.
    pub fn is_assigning(&self) -> bool {
        self.assign.is_held()
    }

    /// Switches to `month` with a freshly fetched roster.
    ///
    /// The previous grid is discarded before anything else happens.
    pub fn begin_month(&mut self, month: Month, workers: Vec<Worker>) -> LoadTicket {
        self.workers = workers;
        self.rebuild(month)
    }

    /// Reloads the displayed month, for instance after the solver ran.
    ///
    /// The grid stays as it is until the records are applied.
    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
            month: self.grid.month(),
        }
    }

    fn rebuild(&mut self, month: Month) -> LoadTicket {
        self.generation += 1;
        self.ready = false;
        self.grid = Grid::build(&self.workers, month);
        self.stats = compute_stats(&self.grid, &self.workers);
        debug!(%month, generation = self.generation, "rebuilt grid");
        LoadTicket {
            generation: self.generation,
            month,
        }
    }

    /// Replaces the grid with records fetched for `ticket`.
    ///
    /// The grid is rebuilt empty before merging, so the load overwrites any
    /// local state. Records for a superseded ticket are discarded.
    pub fn apply_load(&mut self, ticket: &LoadTicket, records: &[ScheduleRecord]) -> Applied {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale load"
            );
            return Applied::Stale;
        }
        self.grid = Grid::build(&self.workers, ticket.month);
        let report = self.grid.merge(records);
        self.stats = compute_stats(&self.grid, &self.workers);
        self.ready = true;
        Applied::Merged(report)
    }

    /// Mutation capability. `None` in view-only mode.
    pub fn editor(&mut self) -> Option<Editor<'_>> {
        match self.mode {
            Mode::Edit => Some(Editor { session: self }),
            Mode::View => None,
        }
    }
}

/// Mutating operations on an editable session.
#[derive(Debug)]
pub struct Editor<'a> {
    session: &'a mut Session,
}

impl Editor<'_> {
    /// Advances one cell along the shift cycle and recomputes stats.
    pub fn cycle(&mut self, key: CellKey) -> Result<Shift> {
        let session = &mut *self.session;
        if !session.ready {
            return Err(Error::LoadPending(session.month().to_string()));
        }
        let shift = session
            .grid
            .cycle(key)
            .ok_or_else(|| Error::CellNotFound {
                worker: key.worker_id.to_string(),
                date: key.date.to_string(),
            })?;
        session.stats = compute_stats(&session.grid, &session.workers);
        Ok(shift)
    }

    /// Cycles the cell of `worker_id` on `day` of the displayed month.
    pub fn cycle_day(&mut self, worker_id: WorkerId, day: u32) -> Result<Shift> {
        let date: NaiveDate = self.session.month().date(day)?;
        self.cycle(CellKey::new(worker_id, date))
    }

    /// Every cell of the grid as records for a bulk upsert.
    pub fn save_payload(&self) -> Result<Vec<ScheduleRecord>> {
        if !self.session.ready {
            return Err(Error::LoadPending(self.session.month().to_string()));
        }
        Ok(self.session.grid.to_records())
    }

    /// Claims the auto-assign latch and builds the request for the
    /// displayed month. The latch is released when the guard drops.
    pub fn begin_auto_assign(
        &self,
        constraints: Constraints,
    ) -> Result<(AutoAssignRequest, LatchGuard)> {
        let guard = self
            .session
            .assign
            .try_acquire()
            .ok_or(Error::AssignInProgress)?;
        Ok((
            AutoAssignRequest::new(self.session.month(), constraints),
            guard,
        ))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
