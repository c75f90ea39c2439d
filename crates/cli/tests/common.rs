// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::{SocketAddr, TcpListener as StdListener};
use std::sync::{Arc, Mutex};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use futures_util::{SinkExt, StreamExt};
use rota_core::{ScheduleRecord, StoreRequest, StoreResponse, Worker, WorkerId};
use tokio_tungstenite::tungstenite::Message;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with a private config path and colour off.
pub fn rota(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rota");
    cmd.env("ROTA_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// What a [`FakeStore`] holds.
#[derive(Default)]
pub struct StoreState {
    pub workers: Vec<Worker>,
    pub records: Vec<ScheduleRecord>,
    pub assign_error: Option<String>,
}

impl StoreState {
    fn handle(&mut self, request: StoreRequest) -> StoreResponse {
        match request {
            StoreRequest::ListWorkers { id } => StoreResponse::Workers {
                id,
                workers: self.workers.clone(),
            },
            StoreRequest::CreateWorker { id, worker } => {
                let next = self.workers.iter().map(|w| w.id.0).max().unwrap_or(0) + 1;
                let created = Worker::new(next, worker.name);
                self.workers.push(created.clone());
                StoreResponse::Worker {
                    id,
                    worker: created,
                }
            }
            StoreRequest::ListSchedules { id, start, end } => {
                let (start, end) = (start.to_string(), end.to_string());
                let records = self
                    .records
                    .iter()
                    .filter(|r| r.date >= start && r.date <= end)
                    .cloned()
                    .collect();
                StoreResponse::Schedules { id, records }
            }
            StoreRequest::UpsertSchedules { id, records } => {
                for record in records {
                    self.records
                        .retain(|r| !(r.worker_id == record.worker_id && r.date == record.date));
                    self.records.push(record);
                }
                StoreResponse::ok(id, "Schedule updated")
            }
            StoreRequest::AutoAssign { id, .. } => match &self.assign_error {
                Some(message) => StoreResponse::error(id, message.clone()),
                None => StoreResponse::ok(id, "auto-assign complete"),
            },
        }
    }
}

/// A WebSocket store served from a background thread until the test
/// process exits.
pub struct FakeStore {
    pub addr: SocketAddr,
    pub state: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn start(state: StoreState) -> Self {
        let state = Arc::new(Mutex::new(state));
        let listener = StdListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let shared = Arc::clone(&state);
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(serve(listener, shared));
        });

        FakeStore { addr, state }
    }

    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    pub fn shift(&self, worker: i64, date: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .records
            .iter()
            .find(|r| r.worker_id == WorkerId(worker) && r.date == date)
            .map(|r| r.shift.clone())
    }
}

async fn serve(listener: StdListener, state: Arc<Mutex<StoreState>>) {
    let listener = tokio::net::TcpListener::from_std(listener).unwrap();
    while let Ok((stream, _)) = listener.accept().await {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            let Ok(ws) = tokio_tungstenite::accept_async(stream).await else {
                return;
            };
            let (mut sink, mut stream) = ws.split();
            while let Some(Ok(msg)) = stream.next().await {
                let Message::Text(text) = msg else { continue };
                let response = match StoreRequest::from_json(&text) {
                    Ok(request) => state.lock().unwrap().handle(request),
                    Err(e) => StoreResponse::error(0, e.to_string()),
                };
                let json = response.to_json().unwrap();
                if sink.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        });
    }
}

pub fn two_workers() -> StoreState {
    StoreState {
        workers: vec![Worker::new(1, "Kim"), Worker::new(2, "Lee")],
        ..StoreState::default()
    }
}

pub fn record(worker: i64, date: &str, shift: &str) -> ScheduleRecord {
    ScheduleRecord {
        worker_id: WorkerId(worker),
        date: date.to_string(),
        shift: shift.to_string(),
    }
}
