// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - a kanban board for the terminal.
//!
//! This crate provides the `kb` CLI: a host for the `kb_core` board logic
//! that keeps one project's board in a `.kanban/` directory.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (project id, issue ID prefix)
//! - [`store::Store`] - Locked JSON snapshot exposed as in-memory collections
//! - [`prefs`] - Saved filter and sort preferences
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use kbrs::{find_work_dir, init_work_dir, store::Store, Config};
//!
//! let config = Config::new("website".into(), "web".into())?;
//! let work_dir = init_work_dir(Path::new("."), &config)?;
//!
//! // Later, find and open an existing board
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let store = Store::open(&work_dir, &config)?;
//! ```

mod cli;
mod commands;
mod display;
pub mod env;
pub mod logging;

pub mod config;
pub mod error;
pub mod prefs;
pub mod store;

pub use cli::{Cli, Command, EditArgs, FilterArgs, OutputFormat, TagCommand};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            prefix,
            project,
            path,
        } => commands::init::run(prefix, project, path),
        Command::Board { all, output } => commands::board::run(all, output),
        Command::Show { id } => commands::show::run(&id),
        Command::Filter(args) => commands::filter::run(args),
        Command::New {
            title,
            description,
            status,
            priority,
            assignee,
            tag,
            output,
        } => commands::new::run(
            commands::new::NewIssueInput {
                title,
                description,
                status,
                priority,
                assignee,
                tags: tag,
            },
            output,
        ),
        Command::Edit(args) => commands::edit::run(args),
        Command::Move {
            id,
            status,
            position,
        } => commands::move_issue::run(&id, &status, position),
        Command::Tag { command } => commands::tag::run(command),
    }
}
