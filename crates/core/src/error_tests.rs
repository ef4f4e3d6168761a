// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    not_found = { Error::NotFound { kind: "issue", id: "kb-123".into() }, "issue not found: kb-123" },
    invalid_priority = { Error::InvalidPriority("p9".into()), "p9" },
    field_empty = { Error::FieldEmpty { field: "title" }, "title cannot be empty" },
    no_statuses = { Error::NoStatuses("web".into()), "web" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_remote_write_display() {
    let err = Error::RemoteWrite {
        kind: "issue",
        id: "kb-1".into(),
        reason: "server offline".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("kb-1"));
    assert!(msg.contains("server offline"));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
