// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of boards, issues and filters.

use kb_core::filter::JoinIndex;
use kb_core::issue::{Issue, Priority, Tag};
use kb_core::{Board, DragOutcome, FilterSpec, SortField};
use serde::Serialize;
use std::collections::HashMap;

use crate::store::Snapshot;

/// Resolves join records to display names for one snapshot.
pub struct Labels<'a> {
    assignees: JoinIndex<'a>,
    tags: JoinIndex<'a>,
    tag_names: HashMap<&'a str, &'a str>,
    status_names: HashMap<&'a str, &'a str>,
}

impl<'a> Labels<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Labels {
            assignees: JoinIndex::assignees(&snapshot.issue_assignees),
            tags: JoinIndex::tags(&snapshot.issue_tags),
            tag_names: tag_names(&snapshot.tags),
            status_names: snapshot
                .statuses
                .iter()
                .map(|s| (s.id.as_str(), s.name.as_str()))
                .collect(),
        }
    }

    pub fn assignees(&self, issue_id: &str) -> Vec<String> {
        self.assignees
            .get(issue_id)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Tag names of an issue, falling back to the raw id for unknown tags.
    pub fn tags(&self, issue_id: &str) -> Vec<String> {
        self.tags
            .get(issue_id)
            .iter()
            .map(|id| self.tag_name(id).to_string())
            .collect()
    }

    pub fn tag_name<'b>(&'b self, tag_id: &'b str) -> &'b str {
        self.tag_names.get(tag_id).copied().unwrap_or(tag_id)
    }

    pub fn status_name<'b>(&'b self, status_id: &'b str) -> &'b str {
        self.status_names.get(status_id).copied().unwrap_or(status_id)
    }
}

fn tag_names(tags: &[Tag]) -> HashMap<&str, &str> {
    tags.iter().map(|t| (t.id.as_str(), t.name.as_str())).collect()
}

/// One issue on one line: `id [priority] title @assignee #tag`.
pub fn format_issue_line(issue: &Issue, labels: &Labels<'_>) -> String {
    let mut line = format!(
        "{} [{}] {}",
        issue.id,
        issue.priority.as_str(),
        issue.title
    );
    for user in labels.assignees(&issue.id) {
        line.push_str(&format!(" @{}", user));
    }
    for tag in labels.tags(&issue.id) {
        line.push_str(&format!(" #{}", tag));
    }
    line
}

/// Columns left to right, each followed by its issues.
pub fn format_board(board: &Board, labels: &Labels<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, column) in board.columns.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", column.status.name, column.issues.len()));
        if column.issues.is_empty() {
            lines.push("  (empty)".to_string());
        }
        for issue in &column.issues {
            lines.push(format!("  {}", format_issue_line(issue, labels)));
        }
    }
    lines
}

/// Full detail of a single issue.
pub fn format_issue_details(issue: &Issue, labels: &Labels<'_>) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {}", issue.priority.as_str(), issue.id),
        format!("Title: {}", issue.title),
        format!("Status: {}", labels.status_name(&issue.status_id)),
    ];
    let assignees = labels.assignees(&issue.id);
    if !assignees.is_empty() {
        lines.push(format!("Assignee: {}", assignees.join(", ")));
    }
    let tags = labels.tags(&issue.id);
    if !tags.is_empty() {
        lines.push(format!("Tags: {}", tags.join(", ")));
    }
    lines.push(format!(
        "Created: {}",
        issue.created_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(format!(
        "Updated: {}",
        issue.updated_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(description) = &issue.description {
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.extend(description.lines().map(|l| format!("  {}", l)));
    }
    lines
}

/// The saved filter and sort settings, one per line.
pub fn format_filters(spec: &FilterSpec, labels: &Labels<'_>) -> Vec<String> {
    let show = |values: Vec<String>| {
        if values.is_empty() {
            "(any)".to_string()
        } else {
            values.join(", ")
        }
    };
    let search = spec.search_query.trim();
    let sort = match spec.sort_field {
        SortField::Manual => "manual".to_string(),
        field => field.as_str().to_string(),
    };

    vec![
        format!(
            "Search: {}",
            if search.is_empty() { "(any)" } else { search }
        ),
        format!(
            "Priority: {}",
            show(
                spec.priorities
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect()
            )
        ),
        format!("Assignee: {}", show(spec.assignee_ids.clone())),
        format!(
            "Tag: {}",
            show(
                spec.tag_ids
                    .iter()
                    .map(|id| labels.tag_name(id).to_string())
                    .collect()
            )
        ),
        format!("Sort: {} {}", sort, spec.sort_direction.as_str()),
    ]
}

/// Human summary of a finished move.
pub fn describe_outcome(issue_id: &str, outcome: &DragOutcome, labels: &Labels<'_>) -> String {
    match outcome {
        DragOutcome::NoOp => format!("{} is already there", issue_id),
        DragOutcome::Reordered {
            column, to_index, ..
        } => format!(
            "Moved {} to position {} in {}",
            issue_id,
            to_index + 1,
            labels.status_name(column)
        ),
        DragOutcome::Moved {
            from_column,
            to_column,
            to_index,
            ..
        } => format!(
            "Moved {} from {} to {} at position {}",
            issue_id,
            labels.status_name(from_column),
            labels.status_name(to_column),
            to_index + 1
        ),
    }
}

#[derive(Serialize)]
pub struct IssueJson {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub sort_order: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assignees: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct ColumnJson {
    pub id: String,
    pub name: String,
    pub color: String,
    pub issues: Vec<IssueJson>,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub columns: Vec<ColumnJson>,
    pub filters_active: bool,
}

pub fn board_json(board: &Board, spec: &FilterSpec, labels: &Labels<'_>) -> BoardJson {
    BoardJson {
        columns: board
            .columns
            .iter()
            .map(|column| ColumnJson {
                id: column.status.id.clone(),
                name: column.status.name.clone(),
                color: column.status.color.clone(),
                issues: column
                    .issues
                    .iter()
                    .map(|issue| IssueJson {
                        id: issue.id.clone(),
                        title: issue.title.clone(),
                        priority: issue.priority,
                        sort_order: issue.sort_order,
                        description: issue.description.clone(),
                        assignees: labels.assignees(&issue.id),
                        tags: labels.tags(&issue.id),
                    })
                    .collect(),
            })
            .collect(),
        filters_active: spec.has_active_filters(),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
