// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::case::TestStatus;
use crate::ledger::Ledger;
use chrono::TimeZone;
use tempfile::TempDir;

#[test]
fn get_missing_key() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get(keys::LEDGER).unwrap(), None);
}

#[test]
fn put_then_get() {
    let db = Database::open_in_memory().unwrap();
    db.put(keys::SAVED_USERS, r#"["Ana"]"#).unwrap();
    assert_eq!(db.get(keys::SAVED_USERS).unwrap().unwrap(), r#"["Ana"]"#);
}

#[test]
fn put_overwrites() {
    let db = Database::open_in_memory().unwrap();
    db.put("k", "1").unwrap();
    db.put("k", "2").unwrap();
    assert_eq!(db.get("k").unwrap().unwrap(), "2");

    let rows: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn ledger_round_trips_through_storage() {
    let db = Database::open_in_memory().unwrap();
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let mut ledger = Ledger::seeded(created);
    let mut cases = ledger.versions()[0].test_cases.clone();
    cases[0].android = TestStatus::Blocked;
    cases[0].assigned_to = Some("Ana".into());
    ledger.mutate_test_cases("v2.5.0", cases);

    db.save_json(keys::LEDGER, &ledger).unwrap();
    let loaded: Ledger = db.load_json(keys::LEDGER).unwrap().unwrap();
    assert_eq!(loaded, ledger);
}

#[test]
fn load_json_reports_malformed_data() {
    let db = Database::open_in_memory().unwrap();
    db.put(keys::SAVED_USERS, "{not json").unwrap();
    assert!(matches!(
        db.load_json::<Vec<String>>(keys::SAVED_USERS),
        Err(crate::Error::Json(_))
    ));
}

#[test]
fn load_lenient_swallows_malformed_data() {
    let db = Database::open_in_memory().unwrap();
    db.put(keys::SAVED_USERS, "{not json").unwrap();
    assert_eq!(db.load_lenient::<Vec<String>>(keys::SAVED_USERS).unwrap(), None);
}

#[test]
fn open_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("board.db");

    {
        let db = Database::open(&path).unwrap();
        db.put(keys::SAVED_ENVIRONMENTS, r#"["QA","Beta"]"#).unwrap();
    }

    assert!(path.exists());
    let db = Database::open(&path).unwrap();
    let envs: Vec<String> = db.load_json(keys::SAVED_ENVIRONMENTS).unwrap().unwrap();
    assert_eq!(envs, vec!["QA", "Beta"]);
}
