// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connection to the remote roster store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Roster    │────►│ StoreClient │────►│  Transport  │────► store
//! │ (controller)│◄────│  (typed ops)│◄────│   (trait)   │◄────
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Requests and responses are correlated by id. Nothing is queued or
//! retried: a failed call is reported and abandoned.

mod client;
mod transport;

pub use client::{ClientConfig, ClientError, ClientResult, StoreClient};
pub use transport::{
    Transport, TransportError, TransportFuture, TransportResult, WebSocketTransport,
};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod client_tests;
