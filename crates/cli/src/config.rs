// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Everything a board needs lives in a `.kanban/` directory:
//! - `config.toml`: project id and the prefix for generated issue ids
//! - `board.json`: the board snapshot (see [`crate::store`])
//! - `prefs.toml`: saved filter and sort preferences (see [`crate::prefs`])

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".kanban";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Project configuration stored in `.kanban/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scope of every row on this board.
    pub project_id: String,
    /// Prefix for issue IDs (2+ lowercase alphanumeric with at least one letter).
    pub prefix: String,
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if prefix is not 2+ lowercase alphanumeric with at least one letter.
    pub fn new(project_id: String, prefix: String) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Config { project_id, prefix })
    }

    /// Loads configuration from the given `.kanban/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if !validate_prefix(&config.prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(config)
    }

    /// Saves configuration to the given `.kanban/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Validate that a prefix is valid (2+ lowercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

/// Derive a prefix from a directory name: lowercase ASCII alphanumerics only.
pub fn derive_prefix(dir_name: &str) -> Option<String> {
    let prefix: String = dir_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    validate_prefix(&prefix).then_some(prefix)
}

/// Find the `.kanban` directory.
///
/// `KANBAN_DIR` wins if set; otherwise walk up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    if let Some(dir) = env::work_dir_override() {
        return if dir.join(CONFIG_FILE_NAME).is_file() {
            Ok(dir)
        } else {
            Err(Error::NotInitialized)
        };
    }
    find_work_dir_from(&std::env::current_dir()?)
}

/// Walk up from `start` looking for a `.kanban` directory.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Initialize a new `.kanban` directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
