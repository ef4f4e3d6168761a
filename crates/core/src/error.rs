// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: urgent, high, medium, low")]
    InvalidPriority(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("no statuses defined for project '{0}'\n  hint: an issue needs a status column to live in")]
    NoStatuses(String),

    #[error("remote write rejected for {kind} {id}: {reason}")]
    RemoteWrite {
        kind: &'static str,
        id: String,
        reason: String,
    },

    #[error("collection unavailable: {0}")]
    CollectionUnavailable(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
