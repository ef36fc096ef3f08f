// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn not_initialized_suggests_init() {
    assert!(Error::NotInitialized.to_string().contains("qb init"));
}

#[test]
fn not_logged_in_has_hint() {
    let msg = Error::NotLoggedIn.to_string();
    assert!(msg.starts_with("not logged in"));
    assert!(msg.contains("hint: run 'qb login <name>'"));
}

#[test]
fn core_errors_display_unchanged() {
    let core = qb_core::Error::CaseNotFound("CT-404".to_string());
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn io_error_converts() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("gone"));
}

#[test]
fn deleted_version_names_login_flag() {
    let msg = Error::SessionVersionGone("v2.5.0".to_string()).to_string();
    assert!(msg.starts_with("version v2.5.0 no longer exists"));
    assert!(msg.contains("--app-version"));
}
