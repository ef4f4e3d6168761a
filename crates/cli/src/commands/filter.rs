// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{FilterStore, SortDirection};

use super::{open_store, print_lines};
use crate::cli::FilterArgs;
use crate::display::{format_filters, Labels};
use crate::error::Result;
use crate::prefs;
use crate::store::Store;

pub fn run(args: FilterArgs) -> Result<()> {
    let (store, _config, work_dir) = open_store()?;
    let mut prefs = prefs::load(&work_dir)?;

    if apply(&mut prefs, args, &store)? {
        prefs::save(&work_dir, &prefs)?;
    }

    let snapshot = store.snapshot();
    print_lines(&format_filters(prefs.filters(), &Labels::new(&snapshot)));
    Ok(())
}

/// Apply the requested changes through the filter store. Returns whether
/// anything was set.
pub(crate) fn apply(prefs: &mut impl FilterStore, args: FilterArgs, store: &Store) -> Result<bool> {
    let mut changed = false;

    if let Some(query) = args.search {
        prefs.set_search_query(query.trim().to_string());
        changed = true;
    }
    if let Some(mut priorities) = args.priority {
        priorities.sort();
        priorities.dedup();
        prefs.set_priorities(priorities);
        changed = true;
    }
    if let Some(assignees) = args.assignee {
        prefs.set_assignee_ids(normalize(assignees));
        changed = true;
    }
    if let Some(tags) = args.tag {
        let ids = normalize(tags)
            .iter()
            .map(|name| store.resolve_tag(name).map(|t| t.id))
            .collect::<Result<Vec<_>>>()?;
        prefs.set_tag_ids(ids);
        changed = true;
    }

    let (field, direction) = prefs.sort();
    let field = args.sort.unwrap_or(field);
    let direction = if args.asc {
        SortDirection::Asc
    } else if args.desc {
        SortDirection::Desc
    } else {
        direction
    };
    if (field, direction) != prefs.sort() {
        prefs.set_sort(field, direction);
        changed = true;
    }
    if args.toggle_direction {
        prefs.toggle_sort_direction();
        changed = true;
    }

    Ok(changed)
}

/// Trim, drop blanks and duplicates, keep first-seen order.
fn normalize(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim().to_string();
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
