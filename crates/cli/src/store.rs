// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk board snapshot.
//!
//! The board is kept in `.kanban/board.json`. Opening a [`Store`] takes an
//! exclusive lock on `.kanban/board.lock` for as long as the store lives, so
//! concurrent `kb` invocations serialize their read-modify-write cycles. The
//! snapshot is loaded into in-memory collections that the core writes
//! through; [`Store::save`] writes them back.

use fs2::FileExt;
use kb_core::board::{Board, BoardInputs};
use kb_core::issue::{Issue, IssueAssignee, IssueTag, Status, Tag};
use kb_core::{Collection, FilterSpec, IssueCollections, MemoryCollection};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

const BOARD_FILE_NAME: &str = "board.json";
const LOCK_FILE_NAME: &str = "board.lock";

/// Serialized form of `board.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub statuses: Vec<Status>,
    pub tags: Vec<Tag>,
    pub issues: Vec<Issue>,
    pub issue_assignees: Vec<IssueAssignee>,
    pub issue_tags: Vec<IssueTag>,
}

pub struct Store {
    path: PathBuf,
    _lock: File,
    pub statuses: MemoryCollection<Status>,
    pub tags: MemoryCollection<Tag>,
    pub issues: MemoryCollection<Issue>,
    pub issue_assignees: MemoryCollection<IssueAssignee>,
    pub issue_tags: MemoryCollection<IssueTag>,
}

impl Store {
    /// Lock and load the board of the given `.kanban/` directory.
    ///
    /// A missing `board.json` is treated as an empty board.
    pub fn open(work_dir: &Path, config: &Config) -> Result<Self> {
        let lock = acquire_lock(&work_dir.join(LOCK_FILE_NAME))?;
        let path = work_dir.join(BOARD_FILE_NAME);
        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Snapshot::default()
        };
        tracing::debug!(
            "loaded {} issues in {} statuses from {}",
            snapshot.issues.len(),
            snapshot.statuses.len(),
            path.display()
        );

        Ok(Store {
            path,
            _lock: lock,
            statuses: MemoryCollection::with_rows("st", snapshot.statuses),
            tags: MemoryCollection::with_rows("tag", snapshot.tags),
            issues: MemoryCollection::with_rows(config.prefix.clone(), snapshot.issues),
            issue_assignees: MemoryCollection::with_rows("ia", snapshot.issue_assignees),
            issue_tags: MemoryCollection::with_rows("it", snapshot.issue_tags),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            statuses: self.statuses.rows().data,
            tags: self.tags.rows().data,
            issues: self.issues.rows().data,
            issue_assignees: self.issue_assignees.rows().data,
            issue_tags: self.issue_tags.rows().data,
        }
    }

    /// Write the current rows back to `board.json`.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.snapshot())?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The collections an issue panel writes through.
    pub fn collections(&self) -> IssueCollections<'_> {
        IssueCollections {
            issues: &self.issues,
            assignees: &self.issue_assignees,
            tags: &self.issue_tags,
        }
    }

    /// Recompute the board from the current rows.
    pub fn board(&self, spec: &FilterSpec) -> Board {
        let snapshot = self.snapshot();
        Board::build(
            BoardInputs {
                statuses: &snapshot.statuses,
                issues: &snapshot.issues,
                issue_assignees: &snapshot.issue_assignees,
                issue_tags: &snapshot.issue_tags,
            },
            spec,
        )
    }

    /// Find an issue by exact ID or unique ID prefix.
    pub fn resolve_issue(&self, id: &str) -> Result<Issue> {
        let issues = self.issues.rows().data;
        if let Some(issue) = issues.iter().find(|i| i.id == id) {
            return Ok(issue.clone());
        }
        let mut matches: Vec<Issue> = issues
            .into_iter()
            .filter(|i| i.id.starts_with(id))
            .collect();
        match matches.len() {
            0 => Err(Error::IssueNotFound(id.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousId {
                prefix: id.to_string(),
                matches: matches.into_iter().map(|i| i.id).collect(),
            }),
        }
    }

    /// Find a status by ID or case-insensitive name.
    pub fn resolve_status(&self, name_or_id: &str) -> Result<Status> {
        let wanted = name_or_id.trim();
        self.statuses
            .rows()
            .data
            .into_iter()
            .find(|s| s.id == wanted || s.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::StatusNotFound(name_or_id.to_string()))
    }

    /// Find a tag by ID or case-insensitive name.
    pub fn resolve_tag(&self, name_or_id: &str) -> Result<Tag> {
        let wanted = name_or_id.trim();
        self.tags
            .rows()
            .data
            .into_iter()
            .find(|t| t.id == wanted || t.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::TagNotFound(name_or_id.to_string()))
    }
}

/// Acquire an exclusive lock on the lock file, waiting for other holders.
fn acquire_lock(lock_path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;
    file.lock_exclusive()?;
    Ok(file)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
