// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board filter preferences.
//!
//! [`FilterStore`] is the getter/setter surface the filter bar talks to.
//! Where the values are kept (and whether they survive a restart) is up to
//! the implementation; [`Preferences`] is a plain serializable one.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterSpec, SortDirection, SortField};
use crate::issue::Priority;

pub trait FilterStore {
    fn filters(&self) -> &FilterSpec;
    fn filters_mut(&mut self) -> &mut FilterSpec;

    fn search_query(&self) -> &str {
        &self.filters().search_query
    }

    fn set_search_query(&mut self, query: String) {
        self.filters_mut().search_query = query;
    }

    fn priorities(&self) -> &[Priority] {
        &self.filters().priorities
    }

    fn set_priorities(&mut self, priorities: Vec<Priority>) {
        self.filters_mut().priorities = priorities;
    }

    fn assignee_ids(&self) -> &[String] {
        &self.filters().assignee_ids
    }

    fn set_assignee_ids(&mut self, assignee_ids: Vec<String>) {
        self.filters_mut().assignee_ids = assignee_ids;
    }

    fn tag_ids(&self) -> &[String] {
        &self.filters().tag_ids
    }

    fn set_tag_ids(&mut self, tag_ids: Vec<String>) {
        self.filters_mut().tag_ids = tag_ids;
    }

    fn sort(&self) -> (SortField, SortDirection) {
        let filters = self.filters();
        (filters.sort_field, filters.sort_direction)
    }

    fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        let filters = self.filters_mut();
        filters.sort_field = field;
        filters.sort_direction = direction;
    }

    fn toggle_sort_direction(&mut self) {
        let (field, direction) = self.sort();
        self.set_sort(field, direction.toggled());
    }
}

/// UI preferences persisted for a browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub kanban_filters: FilterSpec,
}

impl FilterStore for Preferences {
    fn filters(&self) -> &FilterSpec {
        &self.kanban_filters
    }

    fn filters_mut(&mut self) -> &mut FilterSpec {
        &mut self.kanban_filters
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
