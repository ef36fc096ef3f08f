// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn claim_then_release() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.tester, "CT-001").unwrap();
    assert_eq!(ctx.case("CT-001").assigned_to.as_deref(), Some("Téo"));

    run_impl(&mut ctx.board, &ctx.tester, "CT-001").unwrap();
    assert!(ctx.case("CT-001").assigned_to.is_none());
}

#[test]
fn claim_of_anothers_case_is_refused() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.lead, "CT-002").unwrap();
    let err = run_impl(&mut ctx.board, &ctx.tester, "CT-002").unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::CaseLocked { .. })));
    assert_eq!(ctx.case("CT-002").assigned_to.as_deref(), Some("Lia"));
}
