// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response messages for the remote store.
//!
//! Every request carries a client-chosen `id` that the store echoes in its
//! response. The message shapes mirror the store's REST contract:
//!
//! | Request            | Success response | Failure        |
//! |--------------------|------------------|----------------|
//! | `list_workers`     | `workers`        | `error`        |
//! | `create_worker`    | `worker`         | `error`        |
//! | `list_schedules`   | `schedules`      | `error`        |
//! | `upsert_schedules` | `ok`             | `error`        |
//! | `auto_assign`      | `ok`             | `error`        |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::error::{Error, Result};
use crate::record::{DateRange, ScheduleRecord};
use crate::worker::{NewWorker, Worker};

/// Solver default for the minimum day-shift headcount.
pub const DEFAULT_MIN_DAY: u32 = 2;
/// Solver default for the minimum night-shift headcount.
pub const DEFAULT_MIN_NIGHT: u32 = 1;

/// Staffing minimums passed to the auto-assign solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub min_day: u32,
    pub min_night: u32,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            min_day: DEFAULT_MIN_DAY,
            min_night: DEFAULT_MIN_NIGHT,
        }
    }
}

impl Constraints {
    /// Validates user-supplied minimums, which must be non-negative.
    pub fn try_new(min_day: i64, min_night: i64) -> Result<Self> {
        let check = |field: &'static str, value: i64| {
            u32::try_from(value).map_err(|_| Error::InvalidConstraint { field, value })
        };
        Ok(Constraints {
            min_day: check("min_day", min_day)?,
            min_night: check("min_night", min_night)?,
        })
    }
}

/// Body of an auto-assign request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignRequest {
    pub year: i32,
    /// 1-indexed.
    pub month: u32,
    pub constraints: Constraints,
}

impl AutoAssignRequest {
    pub fn new(month: Month, constraints: Constraints) -> Self {
        AutoAssignRequest {
            year: month.year(),
            month: month.month(),
            constraints,
        }
    }
}

/// Messages sent to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreRequest {
    /// Fetch the ordered roster.
    ListWorkers { id: u64 },

    /// Add a worker.
    CreateWorker { id: u64, worker: NewWorker },

    /// Fetch records with `start <= date <= end`.
    ListSchedules {
        id: u64,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Bulk upsert. All or nothing.
    UpsertSchedules {
        id: u64,
        records: Vec<ScheduleRecord>,
    },

    /// Run the solver for one month.
    AutoAssign {
        id: u64,
        year: i32,
        month: u32,
        constraints: Constraints,
    },
}

/// Messages received from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreResponse {
    /// Response to `list_workers`.
    Workers { id: u64, workers: Vec<Worker> },

    /// Response to `create_worker`.
    Worker { id: u64, worker: Worker },

    /// Response to `list_schedules`.
    Schedules {
        id: u64,
        records: Vec<ScheduleRecord>,
    },

    /// Success with a human-readable message.
    Ok { id: u64, message: String },

    /// Domain failure. The message is shown to the user as is.
    Error { id: u64, message: String },
}

impl StoreRequest {
    pub fn list_workers(id: u64) -> Self {
        StoreRequest::ListWorkers { id }
    }

    pub fn create_worker(id: u64, name: impl Into<String>) -> Self {
        StoreRequest::CreateWorker {
            id,
            worker: NewWorker { name: name.into() },
        }
    }

    pub fn list_schedules(id: u64, range: DateRange) -> Self {
        StoreRequest::ListSchedules {
            id,
            start: range.start,
            end: range.end,
        }
    }

    pub fn upsert_schedules(id: u64, records: Vec<ScheduleRecord>) -> Self {
        StoreRequest::UpsertSchedules { id, records }
    }

    pub fn auto_assign(id: u64, request: AutoAssignRequest) -> Self {
        StoreRequest::AutoAssign {
            id,
            year: request.year,
            month: request.month,
            constraints: request.constraints,
        }
    }

    /// Correlation id.
    pub fn id(&self) -> u64 {
        match self {
            StoreRequest::ListWorkers { id }
            | StoreRequest::CreateWorker { id, .. }
            | StoreRequest::ListSchedules { id, .. }
            | StoreRequest::UpsertSchedules { id, .. }
            | StoreRequest::AutoAssign { id, .. } => *id,
        }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl StoreResponse {
    pub fn ok(id: u64, message: impl Into<String>) -> Self {
        StoreResponse::Ok {
            id,
            message: message.into(),
        }
    }

    pub fn error(id: u64, message: impl Into<String>) -> Self {
        StoreResponse::Error {
            id,
            message: message.into(),
        }
    }

    /// Correlation id echoed from the request.
    pub fn id(&self) -> u64 {
        match self {
            StoreResponse::Workers { id, .. }
            | StoreResponse::Worker { id, .. }
            | StoreResponse::Schedules { id, .. }
            | StoreResponse::Ok { id, .. }
            | StoreResponse::Error { id, .. } => *id,
        }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
