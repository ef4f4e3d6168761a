// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{FilterSpec, FilterStore};

use super::open_store;
use crate::cli::OutputFormat;
use crate::display::{board_json, format_board, Labels};
use crate::error::Result;
use crate::prefs;
use crate::store::Store;

pub fn run(all: bool, output: OutputFormat) -> Result<()> {
    let (store, _config, work_dir) = open_store()?;
    let prefs = prefs::load(&work_dir)?;
    println!("{}", render(&store, prefs.filters(), all, output)?);
    Ok(())
}

/// Render the board under the given filters. With `all`, only the sort
/// settings are kept.
pub(crate) fn render(
    store: &Store,
    filters: &FilterSpec,
    all: bool,
    output: OutputFormat,
) -> Result<String> {
    let spec = if all {
        FilterSpec {
            sort_field: filters.sort_field,
            sort_direction: filters.sort_direction,
            ..Default::default()
        }
    } else {
        filters.clone()
    };

    let snapshot = store.snapshot();
    let labels = Labels::new(&snapshot);
    let board = store.board(&spec);

    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&board_json(
            &board, &spec, &labels,
        ))?),
        OutputFormat::Text | OutputFormat::Id => {
            if board.is_empty() {
                return Ok("No status columns".to_string());
            }
            let mut lines = format_board(&board, &labels);
            if spec.has_active_filters() {
                let hidden = snapshot.issues.len().saturating_sub(board.issue_count());
                lines.push(String::new());
                lines.push(format!(
                    "Filters active, {} issue(s) hidden (kb board --all shows everything)",
                    hidden
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
