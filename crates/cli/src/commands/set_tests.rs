// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use yare::parameterized;

#[test]
fn recording_a_result_stamps_the_execution() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.tester, "CT-001", "android", "pass").unwrap();

    let case = ctx.case("CT-001");
    assert_eq!(case.android, TestStatus::Pass);
    assert_eq!(case.tester_android, "Téo");
    assert_eq!(case.executed_on, "2026-04-10");
    assert_eq!(case.executed_version, "v2.5.0");
    assert_eq!(case.executed_environment, "QA");
    assert_eq!(case.assigned_to.as_deref(), Some("Téo"));
    assert_eq!(case.ios, TestStatus::NotStarted);
}

#[parameterized(
    falha = { "Falha", TestStatus::Fail },
    blocked = { "blocked", TestStatus::Blocked },
    na = { "n/a", TestStatus::NotAvailable },
    skipped = { "SKIPPED", TestStatus::Skipped },
)]
fn accepts_status_spellings(input: &str, expected: TestStatus) {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.tester, "CT-002", "ios", input).unwrap();
    assert_eq!(ctx.case("CT-002").ios, expected);
}

#[test]
fn unknown_status_is_rejected() {
    let mut ctx = TestContext::new();
    let err = run_impl(&mut ctx.board, &ctx.tester, "CT-001", "ios", "green").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::InvalidStatus(_))));
    assert_eq!(ctx.case("CT-001").ios, TestStatus::NotStarted);
}

#[test]
fn unknown_platform_is_rejected() {
    let mut ctx = TestContext::new();
    let err = run_impl(&mut ctx.board, &ctx.tester, "CT-001", "web", "pass").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::InvalidPlatform(_))));
}

#[test]
fn case_owned_by_someone_else_is_locked() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.lead, "CT-001", "android", "pass").unwrap();
    let err = run_impl(&mut ctx.board, &ctx.tester, "CT-001", "ios", "pass").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::CaseLocked { .. })));
}

#[test]
fn viewer_cannot_record() {
    let mut ctx = TestContext::new();
    let viewer = ctx.viewer();
    let err = run_impl(&mut ctx.board, &viewer, "CT-001", "ios", "pass").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::PermissionDenied { .. })));
}

#[test]
fn reset_clears_the_executor() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.tester, "CT-003", "ios", "fail").unwrap();
    run_impl(&mut ctx.board, &ctx.tester, "CT-003", "ios", "not_started").unwrap();
    let case = ctx.case("CT-003");
    assert_eq!(case.ios, TestStatus::NotStarted);
    assert_eq!(case.tester_ios, "");
}
