// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workers as cached from the remote roster.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque worker identifier assigned by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub i64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(WorkerId)
    }
}

/// A roster member. Read-only on this side of the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
}

impl Worker {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Worker {
            id: WorkerId(id),
            name: name.into(),
        }
    }
}

/// Payload for adding a worker to the remote roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorker {
    pub name: String,
}
