// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed client for the roster store.
//!
//! One method per store operation. Each call sends a request tagged with a
//! fresh id and waits for the response carrying the same id; anything else
//! that arrives in between is discarded. Failures are returned as is, never
//! retried.

use std::time::Duration;

use rota_core::{
    AutoAssignRequest, DateRange, ScheduleRecord, StoreRequest, StoreResponse, Worker,
};
use tracing::debug;

use super::transport::{Transport, TransportError, WebSocketTransport};

/// Configuration for the store client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the store.
    pub url: String,
    /// Max time to wait for the connection in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            url: "ws://localhost:7890".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

/// Error type for store client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("connect timed out after {0}s")]
    ConnectTimeout(u64),

    /// Domain failure reported by the store.
    #[error("{0}")]
    Remote(String),

    /// The store answered with the wrong kind of message.
    #[error("unexpected response, expected {expected}")]
    UnexpectedResponse { expected: &'static str },
}

/// Result type for store client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client for one roster store.
pub struct StoreClient<T: Transport = WebSocketTransport> {
    config: ClientConfig,
    transport: T,
    next_id: u64,
}

impl StoreClient<WebSocketTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, WebSocketTransport::new())
    }
}

impl<T: Transport> StoreClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        StoreClient {
            config,
            transport,
            next_id: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Connects if not already connected.
    pub async fn connect(&mut self) -> ClientResult<()> {
        if self.transport.is_connected() {
            return Ok(());
        }
        let secs = self.config.connect_timeout_secs;
        debug!("connecting to {}", self.config.url);
        match tokio::time::timeout(
            Duration::from_secs(secs),
            self.transport.connect(&self.config.url),
        )
        .await
        {
            Ok(result) => Ok(result?),
            Err(_) => Err(ClientError::ConnectTimeout(secs)),
        }
    }

    pub async fn disconnect(&mut self) -> ClientResult<()> {
        self.transport.disconnect().await?;
        Ok(())
    }

    /// Sends one request and waits for its response.
    ///
    /// `Error` responses become [`ClientError::Remote`].
    pub async fn request(
        &mut self,
        build: impl FnOnce(u64) -> StoreRequest,
    ) -> ClientResult<StoreResponse> {
        self.connect().await?;

        self.next_id += 1;
        let id = self.next_id;
        let request = build(id);
        debug!(id, "sending {:?}", request);
        self.transport.send(request).await?;

        loop {
            let response = self
                .transport
                .recv()
                .await?
                .ok_or(TransportError::ConnectionClosed)?;
            if response.id() != id {
                debug!(expected = id, got = response.id(), "discarding response");
                continue;
            }
            return match response {
                StoreResponse::Error { message, .. } => {
                    debug!(id, "store error: {}", message);
                    Err(ClientError::Remote(message))
                }
                other => Ok(other),
            };
        }
    }

    /// Ordered roster.
    pub async fn workers(&mut self) -> ClientResult<Vec<Worker>> {
        match self.request(StoreRequest::list_workers).await? {
            StoreResponse::Workers { workers, .. } => Ok(workers),
            _ => Err(ClientError::UnexpectedResponse { expected: "workers" }),
        }
    }

    /// Records with `range.start <= date <= range.end`.
    pub async fn schedules(&mut self, range: DateRange) -> ClientResult<Vec<ScheduleRecord>> {
        match self
            .request(|id| StoreRequest::list_schedules(id, range))
            .await?
        {
            StoreResponse::Schedules { records, .. } => Ok(records),
            _ => Err(ClientError::UnexpectedResponse {
                expected: "schedules",
            }),
        }
    }

    /// Bulk upsert. Returns the store's confirmation.
    pub async fn upsert(&mut self, records: Vec<ScheduleRecord>) -> ClientResult<String> {
        match self
            .request(|id| StoreRequest::upsert_schedules(id, records))
            .await?
        {
            StoreResponse::Ok { message, .. } => Ok(message),
            _ => Err(ClientError::UnexpectedResponse { expected: "ok" }),
        }
    }

    pub async fn create_worker(&mut self, name: &str) -> ClientResult<Worker> {
        match self
            .request(|id| StoreRequest::create_worker(id, name))
            .await?
        {
            StoreResponse::Worker { worker, .. } => Ok(worker),
            _ => Err(ClientError::UnexpectedResponse { expected: "worker" }),
        }
    }

    /// Runs the solver. Returns its success message.
    pub async fn auto_assign(&mut self, request: AutoAssignRequest) -> ClientResult<String> {
        match self
            .request(|id| StoreRequest::auto_assign(id, request))
            .await?
        {
            StoreResponse::Ok { message, .. } => Ok(message),
            _ => Err(ClientError::UnexpectedResponse { expected: "ok" }),
        }
    }
}
