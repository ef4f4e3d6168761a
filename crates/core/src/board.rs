// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived board view.
//!
//! A [`Board`] is recomputed from scratch whenever its inputs change: the
//! host calls [`Board::build`] after any mutation or sync notification.
//! Building filters the issues, groups them by status, and sorts each
//! column on its own.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::filter::{filter_issues, FilterSpec, SortDirection, SortField};
use crate::issue::{Issue, IssueAssignee, IssueTag, Status};

/// Everything a board is derived from.
#[derive(Debug, Clone, Copy)]
pub struct BoardInputs<'a> {
    pub statuses: &'a [Status],
    pub issues: &'a [Issue],
    pub issue_assignees: &'a [IssueAssignee],
    pub issue_tags: &'a [IssueTag],
}

/// One status column with its visible issues in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: Status,
    pub issues: Vec<Issue>,
}

impl BoardColumn {
    pub fn issue_ids(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Columns in left-to-right order.
    pub columns: Vec<BoardColumn>,
}

impl Board {
    /// Recompute the board from its inputs.
    pub fn build(inputs: BoardInputs<'_>, spec: &FilterSpec) -> Board {
        let visible = filter_issues(
            inputs.issues,
            inputs.issue_assignees,
            inputs.issue_tags,
            spec,
        );
        let statuses = sorted_statuses(inputs.statuses);
        let mut grouped = group_by_status(&statuses, visible);

        let columns = statuses
            .into_iter()
            .map(|status| {
                let mut issues = grouped.remove(status.id.as_str()).unwrap_or_default();
                sort_issues(&mut issues, spec.sort_field, spec.sort_direction);
                BoardColumn {
                    status: status.clone(),
                    issues: issues.into_iter().cloned().collect(),
                }
            })
            .collect();

        Board { columns }
    }

    pub fn column(&self, status_id: &str) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.status.id == status_id)
    }

    /// Total number of visible issues.
    pub fn issue_count(&self) -> usize {
        self.columns.iter().map(|c| c.issues.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Statuses in left-to-right order: ascending sort order, ties by id.
pub fn sorted_statuses(statuses: &[Status]) -> Vec<&Status> {
    let mut sorted: Vec<&Status> = statuses.iter().collect();
    sorted.sort_by(|a, b| {
        a.sort_order
            .total_cmp(&b.sort_order)
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

/// Group issues by status id, keeping input order within each group.
/// Issues pointing at a status outside `statuses` are dropped.
pub fn group_by_status<'a>(
    statuses: &[&Status],
    issues: Vec<&'a Issue>,
) -> HashMap<&'a str, Vec<&'a Issue>> {
    let mut grouped: HashMap<&str, Vec<&Issue>> = HashMap::new();
    for issue in issues {
        if statuses.iter().any(|s| s.id == issue.status_id) {
            grouped.entry(issue.status_id.as_str()).or_default().push(issue);
        } else {
            tracing::debug!(
                "issue {} references unknown status {}",
                issue.id,
                issue.status_id
            );
        }
    }
    grouped
}

/// Primary comparison for one sort field, ascending.
fn compare_by_field(a: &Issue, b: &Issue, field: SortField) -> Ordering {
    match field {
        SortField::Manual => a.sort_order.total_cmp(&b.sort_order),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
    }
}

/// Compare two issues for display within a column.
///
/// The direction flips only the chosen field; ties always fall back to
/// ascending sort order, then id, so the result is deterministic.
pub fn compare_issues(a: &Issue, b: &Issue, field: SortField, direction: SortDirection) -> Ordering {
    let primary = compare_by_field(a, b, field);
    let primary = match direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary
        .then_with(|| a.sort_order.total_cmp(&b.sort_order))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort one column in place.
pub fn sort_issues(issues: &mut [&Issue], field: SortField, direction: SortDirection) {
    issues.sort_by(|a, b| compare_issues(a, b, field, direction));
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
