// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote collection contract.
//!
//! The board never talks to a backend directly. Each entity type is reached
//! through a [`Collection`], which exposes the current rows for its scope
//! (plus a loading flag) and the three write operations the board needs:
//! insert, partial update by id, and remove. Writes are eventually
//! consistent with later reads; callers must tolerate a later read
//! overwriting what they assumed locally.
//!
//! [`MemoryCollection`] is the in-process implementation used by tests and
//! by hosts that keep their data in a local snapshot.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::id::generate_unique_id;

/// A row type that can live in a [`Collection`].
pub trait Entity: Clone + fmt::Debug {
    /// Fields supplied on insert; the collection assigns the id.
    type Draft;
    /// Partial update applied by [`Collection::update`].
    type Patch;
    /// Human-readable entity name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Text mixed into generated ids so distinct rows hash apart.
    fn id_seed(draft: &Self::Draft) -> &str;

    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// The current result of a reactive read.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<E> {
    pub data: Vec<E>,
    /// True until the first full sync has arrived.
    pub is_loading: bool,
}

/// Access to one entity type within one scope (typically a project).
pub trait Collection<E: Entity> {
    /// Current matching rows.
    fn rows(&self) -> Rows<E>;

    /// Insert a new row and return it as stored.
    fn insert(&self, draft: E::Draft) -> Result<E>;

    /// Patch the row with the given id.
    fn update(&self, id: &str, patch: E::Patch) -> Result<()>;

    /// Remove the row with the given id.
    fn remove(&self, id: &str) -> Result<()>;
}

#[derive(Debug)]
struct Inner<E> {
    rows: Vec<E>,
    is_loading: bool,
    fail_writes: bool,
    revision: u64,
}

/// Mutex-guarded in-memory collection.
#[derive(Debug)]
pub struct MemoryCollection<E> {
    prefix: String,
    inner: Mutex<Inner<E>>,
}

impl<E: Entity> MemoryCollection<E> {
    /// Create an empty, loaded collection generating ids with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_rows(prefix, Vec::new())
    }

    /// Create a loaded collection seeded with existing rows.
    pub fn with_rows(prefix: impl Into<String>, rows: Vec<E>) -> Self {
        MemoryCollection {
            prefix: prefix.into(),
            inner: Mutex::new(Inner {
                rows,
                is_loading: false,
                fail_writes: false,
                revision: 0,
            }),
        }
    }

    /// Mark the collection as still waiting for its first sync.
    pub fn set_loading(&self, is_loading: bool) -> Result<()> {
        self.lock()?.is_loading = is_loading;
        Ok(())
    }

    /// Make every subsequent write fail as if the server rejected it.
    pub fn set_fail_writes(&self, fail: bool) -> Result<()> {
        self.lock()?.fail_writes = fail;
        Ok(())
    }

    /// Number of successful writes so far. Hosts compare revisions to
    /// decide when derived views need recomputing.
    pub fn revision(&self) -> u64 {
        self.lock().map(|inner| inner.revision).unwrap_or_default()
    }

    /// Replace every row, as a full resync from the server would.
    pub fn replace_all(&self, rows: Vec<E>) -> Result<()> {
        let mut inner = self.lock()?;
        inner.rows = rows;
        inner.is_loading = false;
        inner.revision += 1;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<E>>> {
        self.inner
            .lock()
            .map_err(|_| Error::CollectionUnavailable(format!("{} collection poisoned", E::KIND)))
    }
}

fn rejected(kind: &'static str, id: &str) -> Error {
    Error::RemoteWrite {
        kind,
        id: id.to_string(),
        reason: "writes are disabled".to_string(),
    }
}

impl<E: Entity> Collection<E> for MemoryCollection<E> {
    fn rows(&self) -> Rows<E> {
        match self.lock() {
            Ok(inner) => Rows {
                data: inner.rows.clone(),
                is_loading: inner.is_loading,
            },
            Err(err) => {
                tracing::warn!("reading {} rows failed: {}", E::KIND, err);
                Rows {
                    data: Vec::new(),
                    is_loading: true,
                }
            }
        }
    }

    fn insert(&self, draft: E::Draft) -> Result<E> {
        let mut inner = self.lock()?;
        let now = Utc::now();
        let id = generate_unique_id(&self.prefix, E::id_seed(&draft), &now, |candidate| {
            inner.rows.iter().any(|row| row.id() == candidate)
        });
        if inner.fail_writes {
            return Err(rejected(E::KIND, &id));
        }

        let row = E::from_draft(id, draft, now);
        inner.rows.push(row.clone());
        inner.revision += 1;
        tracing::debug!("inserted {} {}", E::KIND, row.id());
        Ok(row)
    }

    fn update(&self, id: &str, patch: E::Patch) -> Result<()> {
        let mut inner = self.lock()?;
        if inner.fail_writes {
            return Err(rejected(E::KIND, id));
        }

        let row = inner
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| Error::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            })?;
        row.apply(patch, Utc::now());
        inner.revision += 1;
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<()> {
        let mut inner = self.lock()?;
        if inner.fail_writes {
            return Err(rejected(E::KIND, id));
        }

        let before = inner.rows.len();
        inner.rows.retain(|row| row.id() != id);
        if inner.rows.len() == before {
            return Err(Error::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            });
        }
        inner.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
