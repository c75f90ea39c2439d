// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::ClientError;

/// All possible errors that can occur in the rotars library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Any transport-level failure. The detail is logged, not shown.
    #[error("could not reach the roster server\n  hint: check server_url in the config or pass --server")]
    Unreachable,

    /// Domain failure reported by the store, shown verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("unexpected response from the roster server: expected {expected}")]
    UnexpectedResponse { expected: &'static str },

    #[error("not available in view-only mode")]
    ViewOnly,

    #[error("unknown worker '{0}'\n  hint: use the worker id or the exact name")]
    UnknownWorker(String),

    #[error("unknown command '{0}'\n  hint: type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid server url '{0}'\n  hint: the server url must start with ws:// or wss://")]
    InvalidServerUrl(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] rota_core::Error),
}

/// A specialized Result type for rotars operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Remote(message) => Error::Remote(message),
            ClientError::UnexpectedResponse { expected } => Error::UnexpectedResponse { expected },
            ClientError::Transport(e) => {
                tracing::warn!("transport failure: {}", e);
                Error::Unreachable
            }
            ClientError::ConnectTimeout(secs) => {
                tracing::warn!("connect timed out after {}s", secs);
                Error::Unreachable
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
