// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use kb_core::issue::NewStatus;
use kb_core::Collection;

use crate::config::{derive_prefix, init_work_dir, validate_prefix, Config};
use crate::error::{Error, Result};
use crate::store::Store;

/// Columns of a fresh board, left to right.
pub(crate) const DEFAULT_STATUSES: [(&str, &str); 3] = [
    ("To do", "#94a3b8"),
    ("In progress", "#3b82f6"),
    ("Done", "#22c55e"),
];

pub fn run(prefix: Option<String>, project: Option<String>, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let target_path = target_path.canonicalize()?;
    let dir_name = dir_name(&target_path);

    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix(&dir_name).ok_or(Error::InvalidPrefix)?,
    };
    if !validate_prefix(&prefix) {
        return Err(Error::InvalidPrefix);
    }
    let project_id = project
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or(dir_name);

    let config = Config::new(project_id, prefix)?;
    let work_dir = init_work_dir(&target_path, &config)?;

    let store = Store::open(&work_dir, &config)?;
    seed_statuses(&store, &config.project_id)?;
    store.save()?;

    println!("Initialized board at {}", work_dir.display());
    println!("Project: {}", config.project_id);
    println!("Prefix: {}", config.prefix);
    Ok(())
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("board")
        .to_string()
}

/// Create the default status columns.
pub(crate) fn seed_statuses(store: &Store, project_id: &str) -> Result<()> {
    for (position, (name, color)) in DEFAULT_STATUSES.iter().enumerate() {
        store.statuses.insert(NewStatus {
            project_id: project_id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            sort_order: position as f64 + 1.0,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
