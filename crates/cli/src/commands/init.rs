// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use qb_core::{Board, Database};

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(team: Option<String>, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    run_impl(&target_path, team)
}

/// Creates `.qaboard/` and seeds the first-run version.
pub(crate) fn run_impl(target_path: &Path, team: Option<String>) -> Result<()> {
    std::fs::create_dir_all(target_path)?;
    let work_dir = init_work_dir(target_path, team)?;
    let config = Config::load(&work_dir)?;

    let db = Database::open(&get_db_path(&work_dir, &config))?;
    let board = Board::open(db)?;

    println!("Initialized QA board at {}", work_dir.display());
    println!("Team: {}", config.team);
    for version in board.versions() {
        println!(
            "Version: {} [{}] with {} cases",
            version.name,
            version.environment,
            version.test_cases.len()
        );
    }
    println!("Next: qb login <name> --role lead");
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
