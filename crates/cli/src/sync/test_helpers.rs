// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory roster store and a transport that talks to it.

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rota_core::{
    DateRange, Month, NewWorker, ScheduleRecord, Shift, StoreRequest, StoreResponse, Worker,
    WorkerId,
};

use super::transport::{Transport, TransportError, TransportFuture};

pub const ASSIGN_DONE: &str = "auto-assign complete";
pub const INSUFFICIENT_STAFF: &str = "insufficient staff";

/// Store with the same semantics as the roster server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    workers: Vec<Worker>,
    next_id: i64,
    records: BTreeMap<(WorkerId, NaiveDate), String>,
    /// Set to make the next auto-assign fail with this message.
    pub assign_failure: Option<String>,
}

impl MemoryStore {
    pub fn with_workers(names: &[&str]) -> Self {
        let mut store = MemoryStore::default();
        for name in names {
            store.add_worker(name);
        }
        store
    }

    pub fn add_worker(&mut self, name: &str) -> Worker {
        self.next_id += 1;
        let worker = Worker::new(self.next_id, name);
        self.workers.push(worker.clone());
        worker
    }

    /// Stores a raw designation, bypassing validation.
    pub fn put(&mut self, worker: i64, date: &str, shift: &str) {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        self.records
            .insert((WorkerId(worker), date), shift.to_string());
    }

    pub fn get(&self, worker: i64, date: &str) -> Option<&str> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        self.records
            .get(&(WorkerId(worker), date))
            .map(String::as_str)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn handle(&mut self, request: StoreRequest) -> StoreResponse {
        let id = request.id();
        match request {
            StoreRequest::ListWorkers { .. } => StoreResponse::Workers {
                id,
                workers: self.workers.clone(),
            },
            StoreRequest::CreateWorker {
                worker: NewWorker { name },
                ..
            } => {
                if name.trim().is_empty() {
                    return StoreResponse::error(id, "name is required");
                }
                StoreResponse::Worker {
                    id,
                    worker: self.add_worker(&name),
                }
            }
            StoreRequest::ListSchedules { start, end, .. } => {
                let range = DateRange::new(start, end);
                let records = self
                    .records
                    .iter()
                    .filter(|((_, date), _)| range.contains(*date))
                    .map(|((worker_id, date), shift)| ScheduleRecord {
                        worker_id: *worker_id,
                        date: date.format("%Y-%m-%d").to_string(),
                        shift: shift.clone(),
                    })
                    .collect();
                StoreResponse::Schedules { id, records }
            }
            StoreRequest::UpsertSchedules { records, .. } => self.upsert(id, records),
            StoreRequest::AutoAssign {
                year,
                month,
                constraints,
                ..
            } => {
                if let Some(message) = self.assign_failure.take() {
                    return StoreResponse::error(id, message);
                }
                let Ok(month) = Month::new(year, month) else {
                    return StoreResponse::error(id, "invalid month");
                };
                self.auto_assign(id, month, constraints.min_day, constraints.min_night)
            }
        }
    }

    fn upsert(&mut self, id: u64, records: Vec<ScheduleRecord>) -> StoreResponse {
        let mut parsed = Vec::with_capacity(records.len());
        for record in &records {
            match record.parsed_date() {
                Some(date) => parsed.push((record.worker_id, date, record.shift.clone())),
                None => return StoreResponse::error(id, format!("bad date {}", record.date)),
            }
        }
        for (worker_id, date, shift) in parsed {
            if shift == Shift::Empty.as_str() {
                self.records.remove(&(worker_id, date));
            } else {
                self.records.insert((worker_id, date), shift);
            }
        }
        StoreResponse::ok(id, "Schedule updated")
    }

    /// Greedy fill of unassigned cells: nights first, then days, rest off.
    /// Existing records are fixed. Fails without writing when a day cannot
    /// be staffed.
    fn auto_assign(&mut self, id: u64, month: Month, min_day: u32, min_night: u32) -> StoreResponse {
        if self.workers.is_empty() {
            return StoreResponse::error(id, "No employees found");
        }
        let mut fills = Vec::new();
        for column in month.columns() {
            let taken = |shift: Shift| {
                self.workers
                    .iter()
                    .filter(|w| {
                        self.records.get(&(w.id, column.date)).map(String::as_str)
                            == Some(shift.as_str())
                    })
                    .count() as u32
            };
            let need_night = min_night.saturating_sub(taken(Shift::Night));
            let need_day = min_day.saturating_sub(taken(Shift::Day));
            let mut free: VecDeque<WorkerId> = self
                .workers
                .iter()
                .filter(|w| !self.records.contains_key(&(w.id, column.date)))
                .map(|w| w.id)
                .collect();
            if (free.len() as u32) < need_night + need_day {
                return StoreResponse::error(id, INSUFFICIENT_STAFF);
            }
            for _ in 0..need_night {
                if let Some(w) = free.pop_front() {
                    fills.push((w, column.date, Shift::Night));
                }
            }
            for _ in 0..need_day {
                if let Some(w) = free.pop_front() {
                    fills.push((w, column.date, Shift::Day));
                }
            }
            fills.extend(free.into_iter().map(|w| (w, column.date, Shift::Off)));
        }
        for (worker_id, date, shift) in fills {
            self.records
                .insert((worker_id, date), shift.as_str().to_string());
        }
        StoreResponse::ok(id, ASSIGN_DONE)
    }
}

/// Transport answering from a shared [`MemoryStore`].
pub struct MockTransport {
    connected: bool,
    store: Arc<Mutex<MemoryStore>>,
    /// Responses waiting to be received.
    incoming: VecDeque<StoreResponse>,
    /// Every request that was sent.
    sent: Arc<Mutex<Vec<StoreRequest>>>,
    /// Delivered ahead of the next real response.
    injected: VecDeque<StoreResponse>,
    connect_should_fail: bool,
    /// Drop the connection after this many more sends.
    sends_before_failure: Option<usize>,
}

impl MockTransport {
    pub fn new(store: Arc<Mutex<MemoryStore>>) -> Self {
        MockTransport {
            connected: false,
            store,
            incoming: VecDeque::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
            injected: VecDeque::new(),
            connect_should_fail: false,
            sends_before_failure: None,
        }
    }

    pub fn sent(&self) -> Arc<Mutex<Vec<StoreRequest>>> {
        Arc::clone(&self.sent)
    }

    pub fn inject(&mut self, response: StoreResponse) {
        self.injected.push_back(response);
    }

    pub fn set_connect_fail(&mut self, fail: bool) {
        self.connect_should_fail = fail;
    }

    pub fn fail_after_sends(&mut self, sends: usize) {
        self.sends_before_failure = Some(sends);
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, _url: &str) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if self.connect_should_fail {
                Err(TransportError::ConnectionFailed("mock failure".into()))
            } else {
                self.connected = true;
                Ok(())
            }
        })
    }

    fn disconnect(&mut self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            self.connected = false;
            Ok(())
        })
    }

    fn send(&mut self, msg: StoreRequest) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if !self.connected {
                return Err(TransportError::ConnectionClosed);
            }
            if let Some(remaining) = self.sends_before_failure.as_mut() {
                if *remaining == 0 {
                    self.connected = false;
                    return Err(TransportError::SendFailed("broken pipe".into()));
                }
                *remaining -= 1;
            }
            self.sent.lock().unwrap().push(msg.clone());
            let response = self.store.lock().unwrap().handle(msg);
            self.incoming.extend(self.injected.drain(..));
            self.incoming.push_back(response);
            Ok(())
        })
    }

    fn recv(&mut self) -> TransportFuture<'_, Option<StoreResponse>> {
        Box::pin(async move {
            if !self.connected {
                return Err(TransportError::ConnectionClosed);
            }
            Ok(self.incoming.pop_front())
        })
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// A store shared between a test and its transport.
pub fn shared_store(names: &[&str]) -> Arc<Mutex<MemoryStore>> {
    Arc::new(Mutex::new(MemoryStore::with_workers(names)))
}
