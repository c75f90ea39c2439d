// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport between the CLI and the roster store.
//!
//! [`Transport`] carries [`StoreRequest`]s out and [`StoreResponse`]s back.
//! [`WebSocketTransport`] is the production implementation; tests plug in
//! an in-memory store instead.

use std::future::Future;
use std::pin::Pin;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use rota_core::{StoreRequest, StoreResponse};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("connection closed")]
    ConnectionClosed,

    #[error("send failed: {0}")]
    SendFailed(String),

    #[error("receive failed: {0}")]
    ReceiveFailed(String),

    /// The peer sent something that is not a store message.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by every [`Transport`] operation.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Message channel to a roster store.
///
/// One request is in flight at a time; correlation by id happens a layer
/// up in the client.
pub trait Transport: Send + Sync {
    fn connect(&mut self, url: &str) -> TransportFuture<'_, ()>;

    fn disconnect(&mut self) -> TransportFuture<'_, ()>;

    fn send(&mut self, request: StoreRequest) -> TransportFuture<'_, ()>;

    /// Receives the next response. `None` once the peer has closed.
    fn recv(&mut self) -> TransportFuture<'_, Option<StoreResponse>>;

    fn is_connected(&self) -> bool;
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket transport using tokio-tungstenite. Requests go out as JSON
/// text frames; binary and ping frames from the store are skipped.
#[derive(Default)]
pub struct WebSocketTransport {
    sink: Option<SplitSink<WsStream, Message>>,
    frames: Option<SplitStream<WsStream>>,
}

impl WebSocketTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn drop_connection(&mut self) {
        self.sink = None;
        self.frames = None;
    }
}

fn decode(text: &str) -> TransportResult<StoreResponse> {
    StoreResponse::from_json(text).map_err(|e| TransportError::SerializationError(e.to_string()))
}

impl Transport for WebSocketTransport {
    fn connect(&mut self, url: &str) -> TransportFuture<'_, ()> {
        let url = url.to_owned();
        Box::pin(async move {
            let (socket, _) = connect_async(url.as_str())
                .await
                .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;
            let (sink, frames) = socket.split();
            self.sink = Some(sink);
            self.frames = Some(frames);
            Ok(())
        })
    }

    fn disconnect(&mut self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if let Some(mut sink) = self.sink.take() {
                if let Err(e) = sink.close().await {
                    tracing::debug!("close failed: {}", e);
                }
            }
            self.frames = None;
            Ok(())
        })
    }

    fn send(&mut self, request: StoreRequest) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            let json = request
                .to_json()
                .map_err(|e| TransportError::SerializationError(e.to_string()))?;
            let sink = self.sink.as_mut().ok_or(TransportError::ConnectionClosed)?;
            let sent = sink.send(Message::Text(json.into())).await;
            sent.map_err(|e| {
                self.drop_connection();
                TransportError::SendFailed(e.to_string())
            })
        })
    }

    fn recv(&mut self) -> TransportFuture<'_, Option<StoreResponse>> {
        Box::pin(async move {
            let frames = self.frames.as_mut().ok_or(TransportError::ConnectionClosed)?;
            let frame = loop {
                match frames.next().await {
                    Some(Ok(Message::Text(text))) => break Ok(Some(text)),
                    Some(Ok(Message::Close(_))) | None => break Ok(None),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(TransportError::ReceiveFailed(e.to_string())),
                }
            };
            match frame {
                Ok(Some(text)) => decode(&text).map(Some),
                other => {
                    self.drop_connection();
                    other.map(|_| None)
                }
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.sink.is_some()
    }
}
