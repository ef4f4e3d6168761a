// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand, ValueEnum};
use kb_core::{Priority, SortField};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e: kb_core::Error| e.to_string())
}

/// Strict sort field parser; stored preferences are read leniently instead.
fn parse_sort_field(s: &str) -> Result<SortField, String> {
    match s.trim().to_lowercase().as_str() {
        "manual" | "sort_order" => Ok(SortField::Manual),
        "priority" => Ok(SortField::Priority),
        "created" | "created_at" => Ok(SortField::CreatedAt),
        "updated" | "updated_at" => Ok(SortField::UpdatedAt),
        "title" => Ok(SortField::Title),
        _ => Err(format!(
            "unknown sort field '{}'\n  hint: valid fields are: manual, priority, created, updated, title",
            s
        )),
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

#[derive(Parser)]
#[command(name = "kb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A kanban board for issues, kept next to your code")]
pub struct Cli {
    /// Run as if kb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a board in the current directory
    Init {
        /// Prefix for issue IDs (default: derived from directory name)
        #[arg(long)]
        prefix: Option<String>,

        /// Project name (default: directory name)
        #[arg(long)]
        project: Option<String>,

        /// Directory to initialize (default: current directory)
        path: Option<String>,
    },

    /// Show the board, filtered and sorted by the saved preferences
    Board {
        /// Ignore the saved filters (sorting still applies)
        #[arg(long)]
        all: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show one issue in full
    Show {
        /// Issue ID or unique prefix
        id: String,
    },

    /// Show or change the saved board filters
    Filter(FilterArgs),

    /// Create a new issue at the bottom of a column
    New {
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Description
        #[arg(long, short)]
        description: Option<String>,

        /// Status column name or ID (default: leftmost column)
        #[arg(long, short)]
        status: Option<String>,

        /// Priority (urgent, high, medium, low)
        #[arg(long, short, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Assign the issue to a user
        #[arg(long, short)]
        assignee: Option<String>,

        /// Tag name(s) (comma-separated or repeated)
        #[arg(long, short, value_delimiter = ',')]
        tag: Vec<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit an issue
    #[command(arg_required_else_help = true)]
    Edit(EditArgs),

    /// Move an issue to a column and position, as a drag and drop would
    #[command(arg_required_else_help = true)]
    Move {
        /// Issue ID or unique prefix
        id: String,

        /// Target status column name or ID
        status: String,

        /// 1-based position in the target column as currently shown
        /// (default: bottom)
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
        position: Option<u32>,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommand,
    },
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct FilterArgs {
    /// Title search text ("" clears it)
    #[arg(long, short)]
    pub search: Option<String>,

    /// Priorities to show, comma-separated (no value clears)
    #[arg(long, short, value_delimiter = ',', num_args = 0.., value_parser = parse_priority)]
    pub priority: Option<Vec<Priority>>,

    /// Assignees to show, comma-separated; "unassigned" matches issues
    /// without one (no value clears)
    #[arg(long, short, value_delimiter = ',', num_args = 0..)]
    pub assignee: Option<Vec<String>>,

    /// Tag names to show, comma-separated (no value clears)
    #[arg(long, short, value_delimiter = ',', num_args = 0..)]
    pub tag: Option<Vec<String>>,

    /// Sort each column by: manual, priority, created, updated, title
    #[arg(long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Sort ascending
    #[arg(long, conflicts_with_all = ["desc", "toggle_direction"])]
    pub asc: bool,

    /// Sort descending
    #[arg(long, conflicts_with = "toggle_direction")]
    pub desc: bool,

    /// Flip the current sort direction
    #[arg(long)]
    pub toggle_direction: bool,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct EditArgs {
    /// Issue ID or unique prefix
    pub id: String,

    /// New title
    #[arg(long, value_parser = non_empty_string)]
    pub title: Option<String>,

    /// New description ("" clears it)
    #[arg(long, short)]
    pub description: Option<String>,

    /// Status column name or ID
    #[arg(long, short)]
    pub status: Option<String>,

    #[arg(long, short, value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Assign to a user, replacing any current assignee
    #[arg(long, short, conflicts_with = "unassign")]
    pub assignee: Option<String>,

    /// Remove the assignee
    #[arg(long)]
    pub unassign: bool,

    /// Toggle tag(s) on or off (comma-separated or repeated)
    #[arg(long, short, value_delimiter = ',')]
    pub tag: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum TagCommand {
    /// Create a tag
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Display color
        #[arg(long, default_value = "#64748b")]
        color: String,
    },

    /// List tags
    List,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
