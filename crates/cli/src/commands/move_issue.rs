// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{DragEnd, DragLocation, DragOutcome, FilterSpec, FilterStore, ReorderCoordinator};

use super::open_store;
use crate::display::{describe_outcome, Labels};
use crate::error::{Error, Result};
use crate::prefs;
use crate::store::Store;

pub fn run(id: &str, status: &str, position: Option<u32>) -> Result<()> {
    let (store, _config, work_dir) = open_store()?;
    let prefs = prefs::load(&work_dir)?;
    let (issue_id, outcome) = run_impl(&store, prefs.filters(), id, status, position)?;
    if outcome != DragOutcome::NoOp {
        store.save()?;
    }

    let snapshot = store.snapshot();
    println!("{}", describe_outcome(&issue_id, &outcome, &Labels::new(&snapshot)));
    Ok(())
}

/// Replay a move as a drag on the board as currently shown.
///
/// Positions count in the filtered, sorted view. The issue must be visible
/// under the active filters, just as it must be on screen to be dragged.
pub(crate) fn run_impl(
    store: &Store,
    filters: &FilterSpec,
    id: &str,
    status: &str,
    position: Option<u32>,
) -> Result<(String, DragOutcome)> {
    let issue = store.resolve_issue(id)?;
    let target = store.resolve_status(status)?;
    let board = store.board(filters);
    let mut coordinator = ReorderCoordinator::from_board(&board);

    let source = coordinator
        .locate(&issue.id)
        .ok_or_else(|| Error::HiddenByFilters(issue.id.clone()))?;

    let len = coordinator.column(&target.id).len();
    let last = if source.column_id == target.id {
        len.saturating_sub(1)
    } else {
        len
    };
    let index = position
        .map(|p| usize::try_from(p).unwrap_or(usize::MAX).saturating_sub(1).min(last))
        .unwrap_or(last);

    coordinator.on_drag_start(issue.id.clone(), source.clone());
    let event = DragEnd {
        source,
        destination: Some(DragLocation::new(target.id, index)),
        dragged_id: issue.id.clone(),
    };
    let outcome = coordinator.on_drag_end(&event, &store.issues);
    Ok((issue.id, outcome))
}

#[cfg(test)]
#[path = "move_issue_tests.rs"]
mod tests;
