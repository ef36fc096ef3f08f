// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use qb_core::{Environment, Role};
use tempfile::TempDir;

fn session() -> Session {
    Session::new("Ana Souza", Role::Tester, "v1.0.0", Environment::Beta)
}

#[test]
fn missing_file_is_logged_out() {
    let temp = TempDir::new().unwrap();
    assert!(load(temp.path()).unwrap().is_none());
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    save(temp.path(), &session()).unwrap();
    assert!(session_path(temp.path()).ends_with("current/session.json"));
    assert_eq!(load(temp.path()).unwrap(), Some(session()));
}

#[test]
fn malformed_file_is_ignored() {
    let temp = TempDir::new().unwrap();
    let path = session_path(temp.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();
    assert!(load(temp.path()).unwrap().is_none());
}

#[test]
fn clear_reports_whether_a_session_existed() {
    let temp = TempDir::new().unwrap();
    assert!(!clear(temp.path()).unwrap());
    save(temp.path(), &session()).unwrap();
    assert!(clear(temp.path()).unwrap());
    assert!(load(temp.path()).unwrap().is_none());
}
