// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use qb_core::TestStatus;

const CSV: &str = "\
ID,Grupo,Modulo,Cenario,Esperado,Android,iOS,Obs
CT-010,Funcional,1. Login,Login com SSO,Home exibida,Pass,Falha,JIRA-1
CT-001,Geral,Performance,Duplicado,Nada,,,
";

#[test]
fn appends_new_rows_and_skips_existing_ids() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.lead, CSV).unwrap();

    let imported = ctx.case("CT-010");
    assert_eq!(imported.module, "1. Login");
    assert_eq!(imported.android, TestStatus::Pass);
    assert_eq!(imported.ios, TestStatus::Fail);
    assert_eq!(imported.observation, "JIRA-1");

    assert!(ctx.case("CT-001").scenario.starts_with("Performance:"));
    assert_eq!(ctx.board.cases(&ctx.lead, &Default::default()).len(), 4);
}

#[test]
fn tester_cannot_import() {
    let mut ctx = TestContext::new();
    let err = run_impl(&mut ctx.board, &ctx.tester, CSV).unwrap_err();
    assert!(matches!(err, Error::Core(qb_core::Error::PermissionDenied { .. })));
}

#[test]
fn report_lists_duplicates() {
    let report = ImportReport {
        added: vec!["CT-010".to_string()],
        duplicates: vec!["CT-001".to_string()],
    };
    assert_eq!(
        format_report(&report),
        "Imported 1 cases (skipped 1 existing: CT-001)"
    );
}

#[test]
fn empty_input_names_expected_columns() {
    let mut ctx = TestContext::new();
    run_impl(&mut ctx.board, &ctx.lead, "ID,Grupo\n,,\n").unwrap();
    assert_eq!(ctx.board.cases(&ctx.lead, &Default::default()).len(), 3);

    let text = format_report(&ImportReport::default());
    assert!(text.starts_with("No test cases found in input"));
    assert!(text.contains("ID,Grupo,Modulo,Cenario,Esperado,Android,iOS,Obs"));
}

#[test]
fn missing_file_is_an_io_error() {
    let ctx = TestContext::new();
    let path = ctx.project_dir().join("nope.csv");
    let err = read_input(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
