// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn login_saves_users() {
    let ctx = TestContext::new();
    assert_eq!(render_names(ctx.board.users()), "Lia\nTéo");
}

#[test]
fn lead_manages_users() {
    let mut ctx = TestContext::new();
    add_user(&mut ctx.board, &ctx.lead, " Bia ").unwrap();
    add_user(&mut ctx.board, &ctx.lead, "Bia").unwrap();
    assert_eq!(ctx.board.users(), ["Lia", "Téo", "Bia"]);

    remove_user(&mut ctx.board, &ctx.lead, "Bia").unwrap();
    remove_user(&mut ctx.board, &ctx.lead, "Bia").unwrap();
    assert_eq!(ctx.board.users().len(), 2);
}

#[test]
fn tester_cannot_manage_users() {
    let mut ctx = TestContext::new();
    let err = add_user(&mut ctx.board, &ctx.tester, "Bia").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::PermissionDenied { .. })));
}

#[test]
fn lead_manages_environments() {
    let mut ctx = TestContext::new();
    add_environment(&mut ctx.board, &ctx.lead, "Staging").unwrap();
    assert_eq!(render_names(ctx.board.environments()), "QA\nBeta\nStaging");

    remove_environment(&mut ctx.board, &ctx.lead, "Staging").unwrap();
    assert_eq!(ctx.board.environments(), ["QA", "Beta"]);
}

#[test]
fn default_environments_are_permanent() {
    let mut ctx = TestContext::new();
    let err = remove_environment(&mut ctx.board, &ctx.lead, "QA").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(qb_core::Error::DefaultEnvironment(_))
    ));
}

#[test]
fn blank_environment_is_rejected() {
    let mut ctx = TestContext::new();
    let err = add_environment(&mut ctx.board, &ctx.lead, "  ").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(qb_core::Error::FieldEmpty { field: "environment" })
    ));
}

#[test]
fn empty_list() {
    assert_eq!(render_names(&[]), "(none)");
}
