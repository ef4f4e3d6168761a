// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue filter engine.
//!
//! Selects the issues visible on the board. Four filters are supported and
//! compose with AND; within the three set-valued filters the selected
//! values are OR'd:
//!
//! - search text: case-insensitive substring of the title
//! - priorities: issue priority is one of the selected
//! - assignees: any assignee is selected, or [`UNASSIGNED`] is selected and
//!   the issue has none
//! - tags: any tag is selected
//!
//! An empty filter does not filter. Ordering is not applied here; columns
//! are sorted after grouping (see [`crate::board`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::issue::{Issue, IssueAssignee, IssueTag, Priority};

/// Assignee filter value matching issues with no assignee.
pub const UNASSIGNED: &str = "unassigned";

/// Field each column is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum SortField {
    /// Stored sort order, i.e. the order produced by drag and drop.
    #[default]
    #[serde(rename = "sort_order")]
    Manual,
    Priority,
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Manual => "sort_order",
            SortField::Priority => "priority",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Title => "title",
        }
    }

    /// Parse a sort field, falling back to [`SortField::Manual`] for
    /// anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sort_order" | "manual" => SortField::Manual,
            "priority" => SortField::Priority,
            "created_at" | "created" => SortField::CreatedAt,
            "updated_at" | "updated" => SortField::UpdatedAt,
            "title" => SortField::Title,
            other => {
                tracing::debug!("unknown sort field '{}', using manual order", other);
                SortField::Manual
            }
        }
    }
}

impl From<String> for SortField {
    fn from(s: String) -> Self {
        SortField::parse_lenient(&s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Parse a direction, falling back to ascending.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Desc,
            "asc" | "ascending" => SortDirection::Asc,
            other => {
                tracing::debug!("unknown sort direction '{}', using ascending", other);
                SortDirection::Asc
            }
        }
    }
}

impl From<String> for SortDirection {
    fn from(s: String) -> Self {
        SortDirection::parse_lenient(&s)
    }
}

/// Filter and sort settings for one board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub search_query: String,
    pub priorities: Vec<Priority>,
    /// User ids, possibly including [`UNASSIGNED`].
    pub assignee_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl FilterSpec {
    /// True if any filter narrows the board. Sort settings do not count.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty()
            || !self.priorities.is_empty()
            || !self.assignee_ids.is_empty()
            || !self.tag_ids.is_empty()
    }
}

/// Lookup from issue id to the ids on the other side of a join table.
#[derive(Debug, Default)]
pub struct JoinIndex<'a> {
    by_issue: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> JoinIndex<'a> {
    pub fn assignees(records: &'a [IssueAssignee]) -> Self {
        Self::build(records.iter().map(|r| (r.issue_id.as_str(), r.user_id.as_str())))
    }

    pub fn tags(records: &'a [IssueTag]) -> Self {
        Self::build(records.iter().map(|r| (r.issue_id.as_str(), r.tag_id.as_str())))
    }

    fn build(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Self {
        let mut by_issue: HashMap<&str, Vec<&str>> = HashMap::new();
        for (issue_id, other_id) in pairs {
            by_issue.entry(issue_id).or_default().push(other_id);
        }
        JoinIndex { by_issue }
    }

    /// Ids joined to the given issue; empty if none.
    pub fn get(&self, issue_id: &str) -> &[&'a str] {
        self.by_issue.get(issue_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Check the search filter. Blank queries match everything.
pub(crate) fn matches_search(query: &str, title: &str) -> bool {
    let query = query.trim();
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Check the priority filter (OR within the selected set).
pub(crate) fn matches_priority(selected: &[Priority], priority: Priority) -> bool {
    selected.is_empty() || selected.contains(&priority)
}

/// Check the assignee filter (OR within the selected set, with the
/// [`UNASSIGNED`] sentinel matching issues that have no assignee).
pub(crate) fn matches_assignees(selected: &[String], assignees: &[&str]) -> bool {
    if selected.is_empty() {
        return true;
    }
    if assignees.is_empty() && selected.iter().any(|id| id == UNASSIGNED) {
        return true;
    }
    assignees
        .iter()
        .any(|assignee| selected.iter().any(|id| id == assignee))
}

/// Check the tag filter (OR within the selected set).
pub(crate) fn matches_tags(selected: &[String], tags: &[&str]) -> bool {
    selected.is_empty() || tags.iter().any(|tag| selected.iter().any(|id| id == tag))
}

/// Select the issues passing every active filter, in input order.
///
/// Pure: the same inputs always produce the same references.
pub fn filter_issues<'a>(
    issues: &'a [Issue],
    issue_assignees: &[IssueAssignee],
    issue_tags: &[IssueTag],
    spec: &FilterSpec,
) -> Vec<&'a Issue> {
    let assignees = JoinIndex::assignees(issue_assignees);
    let tags = JoinIndex::tags(issue_tags);

    issues
        .iter()
        .filter(|issue| matches_search(&spec.search_query, &issue.title))
        .filter(|issue| matches_priority(&spec.priorities, issue.priority))
        .filter(|issue| matches_assignees(&spec.assignee_ids, assignees.get(&issue.id)))
        .filter(|issue| matches_tags(&spec.tag_ids, tags.get(&issue.id)))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
