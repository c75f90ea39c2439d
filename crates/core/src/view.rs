// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation snapshot of a session.
//!
//! Renderers read a [`GridView`]; they never hold cell state of their own.
//! Whether a cell can be clicked is decided here from the session mode, so
//! a view-only snapshot simply has no triggers to offer. Auto-assign is
//! withheld from `actions` while a request is outstanding.

use serde::Serialize;

use crate::calendar::Month;
use crate::grid::CellKey;
use crate::mode::{Action, Mode};
use crate::session::Session;
use crate::shift::Shift;
use crate::stats::StatsRow;
use crate::worker::WorkerId;

/// Header column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub day: u32,
    pub weekday: &'static str,
    pub weekend: bool,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub shift: Shift,
    /// Address to cycle on click. Absent when the cell is not clickable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<CellKey>,
}

/// One worker's row with its stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub worker_id: WorkerId,
    pub name: String,
    pub cells: Vec<CellView>,
    pub stats: StatsRow,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub month: Month,
    pub mode: Mode,
    pub header: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub actions: Vec<Action>,
}

impl GridView {
    pub fn of(session: &Session) -> Self {
        let mode = session.mode();
        let clickable = mode.allows(Action::Cycle);
        let grid = session.grid();

        let header = grid
            .columns()
            .iter()
            .map(|column| HeaderView {
                day: column.day,
                weekday: column.label(),
                weekend: column.is_weekend(),
            })
            .collect();

        let rows = grid
            .rows()
            .iter()
            .map(|row| RowView {
                worker_id: row.worker.id,
                name: row.worker.name.clone(),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| CellView {
                        shift: cell.shift,
                        trigger: clickable.then_some(cell.key),
                    })
                    .collect(),
                stats: session
                    .stats()
                    .get(row.worker.id)
                    .copied()
                    .unwrap_or_default(),
            })
            .collect();

        GridView {
            month: grid.month(),
            mode,
            header,
            rows,
            actions: mode
                .actions()
                .into_iter()
                .filter(|action| *action != Action::AutoAssign || !session.is_assigning())
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
