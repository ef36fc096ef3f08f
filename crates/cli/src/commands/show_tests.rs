// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use qb_core::{CaseUpdate, Platform, TestStatus};

#[test]
fn text_details() {
    let ctx = TestContext::new();
    let text = render(&ctx.board, &ctx.tester, "CT-003", OutputFormat::Text).unwrap();
    assert!(text.starts_with("[Cadastro Usuário] CT-003"));
    assert!(text.contains("Group: Cadastro"));
}

#[test]
fn json_includes_execution_stamps() {
    let mut ctx = TestContext::new();
    ctx.board
        .update_case(
            &ctx.tester,
            "CT-001",
            CaseUpdate::Status(Platform::Android, TestStatus::Pass),
        )
        .unwrap();

    let json = render(&ctx.board, &ctx.tester, "CT-001", OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["android"]["status"], "pass");
    assert_eq!(value["android"]["tester"], "Téo");
    assert!(value["ios"].get("tester").is_none());
    assert_eq!(value["executed_on"], "2026-04-10");
    assert_eq!(value["executed_version"], "v2.5.0");
    assert_eq!(value["assigned_to"], "Téo");
    assert!(value.get("observation").is_none());
}

#[test]
fn unknown_case() {
    let ctx = TestContext::new();
    let err = render(&ctx.board, &ctx.tester, "CT-404", OutputFormat::Text).unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::CaseNotFound(_))));
}
