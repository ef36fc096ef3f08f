// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use qb_core::ledger::FIRST_RUN_VERSION;
use tempfile::TempDir;

#[test]
fn creates_config_and_seeded_database() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), Some("Mobile".to_string())).unwrap();

    let work_dir = temp.path().join(".qaboard");
    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config.team, "Mobile");
    assert!(work_dir.join(".gitignore").exists());

    let db = Database::open(&work_dir.join("board.db")).unwrap();
    let board = Board::open(db).unwrap();
    assert_eq!(board.versions().len(), 1);
    assert_eq!(board.versions()[0].name, FIRST_RUN_VERSION);
}

#[test]
fn creates_missing_target_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("board");
    run_impl(&target, None).unwrap();
    assert!(target.join(".qaboard").join("config.toml").exists());
}

#[test]
fn second_init_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), None).unwrap();
    let err = run_impl(temp.path(), None).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}

#[test]
fn blank_team_is_rejected() {
    let temp = TempDir::new().unwrap();
    let err = run_impl(temp.path(), Some("  ".to_string())).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!temp.path().join(".qaboard").exists());
}
