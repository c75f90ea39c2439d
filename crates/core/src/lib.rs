// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rota-core: roster grid model for the rota scheduler.
//!
//! This crate holds the calendar-indexed grid, the shift vocabulary and its
//! click cycle, per-worker stats, the view-only gate and the store protocol
//! messages. It does no I/O; the `rota` CLI drives it against a remote
//! store.

pub mod calendar;
pub mod error;
pub mod grid;
pub mod latch;
pub mod mode;
pub mod protocol;
pub mod record;
pub mod session;
pub mod shift;
pub mod stats;
pub mod view;
pub mod worker;

pub use calendar::{days_in_month, weekday_label, Column, Month};
pub use error::{Error, Result};
pub use grid::{Cell, CellKey, Grid, MergeReport, Row};
pub use latch::{Latch, LatchGuard};
pub use mode::{share_link, Action, Mode};
pub use protocol::{AutoAssignRequest, Constraints, StoreRequest, StoreResponse};
pub use record::{DateRange, ScheduleRecord};
pub use session::{Applied, Editor, LoadTicket, Session};
pub use shift::Shift;
pub use stats::{compute_stats, Stats, StatsRow};
pub use view::GridView;
pub use worker::{NewWorker, Worker, WorkerId};
