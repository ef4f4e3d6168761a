// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Kanban reorder coordinator.
//!
//! Turns a drag-and-drop gesture into an immediate change of the local
//! column mirror plus a single sort-order write to the issue collection.
//!
//! Sort orders are fractional: an issue dropped between two neighbors gets
//! their mean, so only the dragged issue's record changes. The mirror is
//! authoritative for rendering until the next [`ReorderCoordinator::rebuild`],
//! which replaces it wholesale with server-confirmed data.
//!
//! Per gesture the coordinator goes `Idle -> Dragging -> Idle`; only a drop
//! that actually moves something mutates state or writes.

use std::collections::HashMap;

use crate::board::Board;
use crate::collection::Collection;
use crate::issue::{Issue, IssuePatch};

/// Gap between consecutive sort orders in a fresh or renumbered column.
pub const SORT_ORDER_STEP: f64 = 1000.0;

/// Sort order for an issue inserted at `index` among `neighbors`.
///
/// `neighbors` are the other issues of the destination column, ascending.
pub fn compute_sort_order(neighbors: &[f64], index: usize) -> f64 {
    match neighbors {
        [] => SORT_ORDER_STEP,
        [first, ..] if index == 0 => first / 2.0,
        [.., last] if index >= neighbors.len() => last + SORT_ORDER_STEP,
        _ => (neighbors[index - 1] + neighbors[index]) / 2.0,
    }
}

/// Returns true if `key` still separates its would-be neighbors.
fn fits_between(neighbors: &[f64], index: usize, key: f64) -> bool {
    if !key.is_finite() {
        return false;
    }
    let above = index.checked_sub(1).and_then(|i| neighbors.get(i));
    let below = neighbors.get(index);
    above.is_none_or(|a| *a < key) && below.is_none_or(|b| key < *b)
}

/// A position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        DragLocation {
            column_id: column_id.into(),
            index,
        }
    }
}

/// The result reported by the drag-and-drop surface when a drag ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: DragLocation,
    /// `None` when released outside any column.
    pub destination: Option<DragLocation>,
    pub dragged_id: String,
}

/// What a finished gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Invalid or same-position drop; nothing changed and nothing was sent.
    NoOp,
    /// Moved within one column.
    Reordered {
        column: String,
        from_index: usize,
        to_index: usize,
        sort_order: f64,
    },
    /// Moved to another column.
    Moved {
        from_column: String,
        to_column: String,
        to_index: usize,
        sort_order: f64,
    },
}

/// Gesture state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        issue_id: String,
        source: DragLocation,
    },
}

/// One issue placement to send to the collection.
#[derive(Debug, Clone, PartialEq)]
struct Placement {
    issue_id: String,
    status_id: String,
    sort_order: f64,
}

/// Owns the optimistic per-column ordering for one board view.
#[derive(Debug, Clone, Default)]
pub struct ReorderCoordinator {
    /// Column ids, left to right.
    columns: Vec<String>,
    /// Column id to issue ids in display order.
    items: HashMap<String, Vec<String>>,
    /// Last known sort order of every mirrored issue, including local moves.
    sort_orders: HashMap<String, f64>,
    phase: DragPhase,
}

impl ReorderCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a coordinator mirroring the given board.
    pub fn from_board(board: &Board) -> Self {
        let mut coordinator = Self::new();
        coordinator.rebuild(board);
        coordinator
    }

    /// Replace the mirror with the board's current grouping.
    ///
    /// Called whenever the upstream issues or statuses change. Local moves
    /// that the server has not confirmed are discarded.
    pub fn rebuild(&mut self, board: &Board) {
        self.columns = board.columns.iter().map(|c| c.status.id.clone()).collect();
        self.items = board
            .columns
            .iter()
            .map(|c| (c.status.id.clone(), c.issue_ids()))
            .collect();
        self.sort_orders = board
            .columns
            .iter()
            .flat_map(|c| c.issues.iter())
            .map(|issue: &Issue| (issue.id.clone(), issue.sort_order))
            .collect();
    }

    /// Column ids, left to right.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The mirror: column id to issue ids in display order.
    pub fn items(&self) -> &HashMap<String, Vec<String>> {
        &self.items
    }

    /// Issue ids of one column, or an empty slice for unknown columns.
    pub fn column(&self, column_id: &str) -> &[String] {
        self.items.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Locally known sort order of an issue.
    pub fn sort_order(&self, issue_id: &str) -> Option<f64> {
        self.sort_orders.get(issue_id).copied()
    }

    /// Where an issue currently sits in the mirror.
    pub fn locate(&self, issue_id: &str) -> Option<DragLocation> {
        self.columns.iter().find_map(|column_id| {
            self.column(column_id)
                .iter()
                .position(|id| id == issue_id)
                .map(|index| DragLocation::new(column_id.clone(), index))
        })
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Record that a drag has started.
    pub fn on_drag_start(&mut self, issue_id: impl Into<String>, source: DragLocation) {
        self.phase = DragPhase::Dragging {
            issue_id: issue_id.into(),
            source,
        };
    }

    /// Apply a finished drag.
    ///
    /// The mirror is updated before anything is sent. The write goes to
    /// `issues` without its outcome affecting the mirror: a rejected write
    /// is logged and left for the next rebuild to correct.
    pub fn on_drag_end(&mut self, event: &DragEnd, issues: &dyn Collection<Issue>) -> DragOutcome {
        self.phase = DragPhase::Idle;

        let Some(destination) = &event.destination else {
            tracing::debug!("drag of {} dropped outside any column", event.dragged_id);
            return DragOutcome::NoOp;
        };
        let source = &event.source;
        if source == destination {
            tracing::debug!("drag of {} dropped in place", event.dragged_id);
            return DragOutcome::NoOp;
        }
        if !self.is_valid_source(event) {
            tracing::warn!(
                "stale drag: {} is not at {}[{}]",
                event.dragged_id,
                source.column_id,
                source.index
            );
            return DragOutcome::NoOp;
        }
        if !self.items.contains_key(&destination.column_id) {
            tracing::warn!("drag target column {} is unknown", destination.column_id);
            return DragOutcome::NoOp;
        }

        let mut neighbors: Vec<(String, f64)> = self
            .column(&destination.column_id)
            .iter()
            .filter(|id| **id != event.dragged_id)
            .filter_map(|id| self.sort_order(id).map(|key| (id.clone(), key)))
            .collect();
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        let keys: Vec<f64> = neighbors.iter().map(|(_, key)| *key).collect();
        let sort_order = compute_sort_order(&keys, destination.index);

        let to_index = self.move_in_mirror(event, destination);
        self.sort_orders.insert(event.dragged_id.clone(), sort_order);

        let placements = if fits_between(&keys, destination.index, sort_order) {
            vec![Placement {
                issue_id: event.dragged_id.clone(),
                status_id: destination.column_id.clone(),
                sort_order,
            }]
        } else {
            tracing::info!(
                "sort order precision exhausted in column {}, renumbering",
                destination.column_id
            );
            let index = destination.index.min(neighbors.len());
            let slot = Slot {
                above: index
                    .checked_sub(1)
                    .and_then(|i| neighbors.get(i))
                    .map(|(id, _)| id.as_str()),
                below: neighbors.get(index).map(|(id, _)| id.as_str()),
            };
            self.renumber(&destination.column_id, &event.dragged_id, slot, issues)
        };
        let sort_order = self.sort_order(&event.dragged_id).unwrap_or(sort_order);

        for placement in &placements {
            dispatch(issues, placement);
        }

        if source.column_id == destination.column_id {
            DragOutcome::Reordered {
                column: destination.column_id.clone(),
                from_index: source.index,
                to_index,
                sort_order,
            }
        } else {
            DragOutcome::Moved {
                from_column: source.column_id.clone(),
                to_column: destination.column_id.clone(),
                to_index,
                sort_order,
            }
        }
    }

    fn is_valid_source(&self, event: &DragEnd) -> bool {
        self.items
            .get(&event.source.column_id)
            .and_then(|ids| ids.get(event.source.index))
            .is_some_and(|id| *id == event.dragged_id)
    }

    /// Remove the dragged id from its source and insert it at the
    /// destination. Returns the index it landed at.
    fn move_in_mirror(&mut self, event: &DragEnd, destination: &DragLocation) -> usize {
        if let Some(source_ids) = self.items.get_mut(&event.source.column_id) {
            source_ids.remove(event.source.index);
        }
        let target = self.items.entry(destination.column_id.clone()).or_default();
        let to_index = destination.index.min(target.len());
        target.insert(to_index, event.dragged_id.clone());
        to_index
    }

    /// Reassign evenly spaced sort orders to a whole column, ascending by
    /// stored sort order, with the dragged issue placed in `slot`. Issues
    /// hidden from the mirror are included so their relative order holds.
    /// Returns the placements whose value changed; the dragged issue is
    /// always among them.
    fn renumber(
        &mut self,
        column_id: &str,
        dragged_id: &str,
        slot: Slot<'_>,
        issues: &dyn Collection<Issue>,
    ) -> Vec<Placement> {
        let mut ordered: Vec<(String, f64)> = self
            .column(column_id)
            .iter()
            .filter(|id| *id != dragged_id)
            .filter_map(|id| self.sort_order(id).map(|key| (id.clone(), key)))
            .collect();
        ordered.extend(
            issues
                .rows()
                .data
                .into_iter()
                .filter(|i| i.status_id == column_id && !self.sort_orders.contains_key(&i.id))
                .map(|i| (i.id, i.sort_order)),
        );
        ordered.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let find = |target: Option<&str>| {
            target.and_then(|t| ordered.iter().position(|(id, _)| id == t))
        };
        let position = find(slot.below)
            .or_else(|| find(slot.above).map(|p| p + 1))
            .unwrap_or(ordered.len());
        let current = self.sort_order(dragged_id).unwrap_or(f64::NAN);
        ordered.insert(position, (dragged_id.to_string(), current));

        let mut placements = Vec::new();
        for (position, (issue_id, key)) in ordered.into_iter().enumerate() {
            let sort_order = (position as f64 + 1.0) * SORT_ORDER_STEP;
            if key == sort_order && issue_id != dragged_id {
                continue;
            }
            if self.sort_orders.contains_key(&issue_id) {
                self.sort_orders.insert(issue_id.clone(), sort_order);
            }
            placements.push(Placement {
                issue_id,
                status_id: column_id.to_string(),
                sort_order,
            });
        }
        placements
    }
}

/// Where the dragged issue lands among its visible neighbors.
#[derive(Debug, Clone, Copy)]
struct Slot<'a> {
    above: Option<&'a str>,
    below: Option<&'a str>,
}

fn dispatch(issues: &dyn Collection<Issue>, placement: &Placement) {
    let patch = IssuePatch::placement(placement.status_id.clone(), placement.sort_order);
    match issues.update(&placement.issue_id, patch) {
        Ok(()) => tracing::info!(
            "placed {} in {} at {}",
            placement.issue_id,
            placement.status_id,
            placement.sort_order
        ),
        Err(err) => tracing::warn!(
            "failed to persist placement of {}: {}",
            placement.issue_id,
            err
        ),
    }
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;
