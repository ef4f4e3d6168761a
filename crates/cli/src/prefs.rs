// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter preferences persisted in `.kanban/prefs.toml`.

use kb_core::Preferences;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const PREFS_FILE_NAME: &str = "prefs.toml";

/// Load saved preferences, or the defaults if none were saved yet.
pub fn load(work_dir: &Path) -> Result<Preferences> {
    let path = work_dir.join(PREFS_FILE_NAME);
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("failed to parse prefs: {}", e)))
}

pub fn save(work_dir: &Path, prefs: &Preferences) -> Result<()> {
    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::Config(format!("failed to serialize prefs: {}", e)))?;
    fs::write(work_dir.join(PREFS_FILE_NAME), content)?;
    tracing::debug!("saved preferences to {}", work_dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
