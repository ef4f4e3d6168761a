// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Log filter directives from `KANBAN_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::KANBAN_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Explicit `.kanban` directory from `KANBAN_DIR`, if set and non-empty.
pub fn work_dir_override() -> Option<PathBuf> {
    std::env::var(vars::KANBAN_DIR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
