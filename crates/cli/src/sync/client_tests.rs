// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the store client.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use super::client::{ClientConfig, ClientError, StoreClient};
use super::test_helpers::{shared_store, MemoryStore, MockTransport, ASSIGN_DONE};
use super::transport::TransportError;
use chrono::NaiveDate;
use rota_core::{
    AutoAssignRequest, Constraints, DateRange, Month, ScheduleRecord, Shift, StoreRequest,
    StoreResponse, WorkerId,
};

fn client(store: &Arc<Mutex<MemoryStore>>) -> StoreClient<MockTransport> {
    StoreClient::with_transport(
        ClientConfig::default(),
        MockTransport::new(Arc::clone(store)),
    )
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn april() -> Month {
    Month::new(2024, 4).unwrap()
}

#[tokio::test]
async fn test_connects_lazily() {
    let store = shared_store(&["Kim"]);
    let mut client = client(&store);
    assert!(!client.is_connected());

    let workers = client.workers().await.unwrap();
    assert_eq!(workers.len(), 1);
    assert!(client.is_connected());

    client.disconnect().await.unwrap();
    assert!(!client.is_connected());
}

#[tokio::test]
async fn test_schedules_filters_by_range() {
    let store = shared_store(&["Kim"]);
    {
        let mut store = store.lock().unwrap();
        store.put(1, "2024-03-31", "Day");
        store.put(1, "2024-04-01", "Night");
        store.put(1, "2024-04-30", "Off");
        store.put(1, "2024-05-01", "Day");
    }
    let mut client = client(&store);

    let records = client.schedules(DateRange::month(april())).await.unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-04-01", "2024-04-30"]);
}

#[tokio::test]
async fn test_upsert_empty_deletes() {
    let store = shared_store(&["Kim"]);
    store.lock().unwrap().put(1, "2024-04-02", "Day");
    let mut client = client(&store);

    let records = vec![
        ScheduleRecord::new(WorkerId(1), date("2024-04-02"), Shift::Empty),
        ScheduleRecord::new(WorkerId(1), date("2024-04-03"), Shift::Holiday),
    ];
    let message = client.upsert(records).await.unwrap();
    assert_eq!(message, "Schedule updated");

    let store = store.lock().unwrap();
    assert_eq!(store.get(1, "2024-04-02"), None);
    assert_eq!(store.get(1, "2024-04-03"), Some("Holiday"));
}

#[tokio::test]
async fn test_create_worker_returns_assigned_id() {
    let store = shared_store(&["Kim", "Lee"]);
    let mut client = client(&store);

    let worker = client.create_worker("Park").await.unwrap();
    assert_eq!(worker.id, WorkerId(3));
    assert_eq!(worker.name, "Park");
}

#[tokio::test]
async fn test_remote_error_is_verbatim() {
    let store = shared_store(&["Kim"]);
    let mut client = client(&store);

    let err = client.create_worker("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::Remote(ref m) if m == "name is required"));
}

#[tokio::test]
async fn test_auto_assign_returns_message() {
    let store = shared_store(&["Kim", "Lee", "Park"]);
    let mut client = client(&store);

    let request = AutoAssignRequest::new(april(), Constraints::default());
    assert_eq!(client.auto_assign(request).await.unwrap(), ASSIGN_DONE);
    assert_eq!(store.lock().unwrap().record_count(), 90);
}

#[tokio::test]
async fn test_mismatched_ids_are_discarded() {
    let store = shared_store(&["Kim"]);
    let mut transport = MockTransport::new(Arc::clone(&store));
    transport.inject(StoreResponse::error(999, "stale"));
    transport.inject(StoreResponse::Workers {
        id: 998,
        workers: Vec::new(),
    });
    let mut client = StoreClient::with_transport(ClientConfig::default(), transport);

    let workers = client.workers().await.unwrap();
    assert_eq!(workers.len(), 1);
}

#[tokio::test]
async fn test_request_ids_increase() {
    let store = shared_store(&["Kim"]);
    let transport = MockTransport::new(Arc::clone(&store));
    let sent = transport.sent();
    let mut client = StoreClient::with_transport(ClientConfig::default(), transport);

    client.workers().await.unwrap();
    client.schedules(DateRange::month(april())).await.unwrap();

    let ids: Vec<u64> = sent.lock().unwrap().iter().map(StoreRequest::id).collect();
    assert_eq!(ids, [1, 2]);
}

#[tokio::test]
async fn test_connect_failure_is_transport_error() {
    let store = shared_store(&["Kim"]);
    let mut transport = MockTransport::new(Arc::clone(&store));
    transport.set_connect_fail(true);
    let mut client = StoreClient::with_transport(ClientConfig::default(), transport);

    let err = client.workers().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn test_send_failure_is_not_retried() {
    let store = shared_store(&["Kim"]);
    let mut transport = MockTransport::new(Arc::clone(&store));
    transport.fail_after_sends(1);
    let sent = transport.sent();
    let mut client = StoreClient::with_transport(ClientConfig::default(), transport);

    client.workers().await.unwrap();
    let records = vec![ScheduleRecord::new(
        WorkerId(1),
        date("2024-04-02"),
        Shift::Day,
    )];
    let err = client.upsert(records).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(sent.lock().unwrap().len(), 1);
    assert_eq!(store.lock().unwrap().record_count(), 0);
}
