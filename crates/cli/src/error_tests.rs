// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::sync::TransportError;
use yare::parameterized;

#[parameterized(
    view_only = { Error::ViewOnly, "view-only" },
    unknown_worker = { Error::UnknownWorker("Kim".into()), "Kim" },
    unknown_command = { Error::UnknownCommand("frob".into()), "help" },
    server_url = { Error::InvalidServerUrl("http://x".into()), "ws://" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn remote_errors_are_verbatim() {
    let err: Error = ClientError::Remote("insufficient staff".into()).into();
    assert_eq!(err.to_string(), "insufficient staff");
}

#[parameterized(
    connect = { ClientError::Transport(TransportError::ConnectionFailed("refused".into())) },
    closed = { ClientError::Transport(TransportError::ConnectionClosed) },
    timeout = { ClientError::ConnectTimeout(5) },
)]
fn transport_errors_are_generic(source: ClientError) {
    let err: Error = source.into();
    assert!(matches!(err, Error::Unreachable));
    let msg = err.to_string();
    assert!(msg.starts_with("could not reach the roster server"));
    assert!(!msg.contains("refused"));
}

#[test]
fn core_errors_pass_through() {
    let err: Error = rota_core::Error::AssignInProgress.into();
    assert_eq!(err.to_string(), "an auto-assign request is already in progress");
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
