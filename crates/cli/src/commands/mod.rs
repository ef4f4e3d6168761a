// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod edit;
pub mod filter;
pub mod init;
pub mod move_issue;
pub mod new;
pub mod show;
pub mod tag;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use crate::config::{find_work_dir, Config};
use crate::error::Result;
use crate::store::Store;

/// Helper to open the board from the current context.
pub fn open_store() -> Result<(Store, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let store = Store::open(&work_dir, &config)?;
    Ok((store, config, work_dir))
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
