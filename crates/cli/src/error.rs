// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'kb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("ambiguous issue ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("status not found: '{0}'\n  hint: run 'kb board' to see the status columns")]
    StatusNotFound(String),

    #[error("tag not found: '{0}'\n  hint: create it with 'kb tag add {0}'")]
    TagNotFound(String),

    #[error("tag already exists: '{0}'")]
    TagExists(String),

    #[error("issue {0} is hidden by the active filters\n  hint: run 'kb filter' to see them")]
    HiddenByFilters(String),

    #[error("{0}")]
    Core(#[from] kb_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("board file error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
