// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

fn json_of(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout_of(temp, args)).unwrap()
}

#[test]
fn list_json() {
    let temp = init_temp();
    login(&temp, "Ana", "tester");

    let value = json_of(&temp, &["list", "-o", "json", "-q", "ct-00"]);
    assert_eq!(value["version"], "v2.5.0");
    assert_eq!(value["cases"].as_array().unwrap().len(), 3);
    assert_eq!(value["filters_applied"][0], "query ~ ct-00");
}

#[test]
fn show_json() {
    let temp = init_temp();
    login(&temp, "Ana", "tester");
    stdout_of(&temp, &["set", "CT-003", "ios", "blocked"]);

    let value = json_of(&temp, &["show", "CT-003", "-o", "json"]);
    assert_eq!(value["ios"]["status"], "blocked");
    assert_eq!(value["ios"]["tester"], "Ana");
    assert_eq!(value["executed_environment"], "QA");
}

#[test]
fn summary_json() {
    let temp = init_temp();
    login(&temp, "Ana", "tester");
    stdout_of(&temp, &["set", "CT-001", "android", "pass"]);

    let value = json_of(&temp, &["summary", "-p", "android", "-o", "json"]);
    assert_eq!(value["platform"], "android");
    assert_eq!(value["summary"]["passed"], 1);
    assert_eq!(value["kpi"]["total"], 6);
    assert!(value.get("trend").is_none());
}

#[test]
fn version_list_json() {
    let temp = init_temp();

    let value = json_of(&temp, &["version", "list", "-o", "json"]);
    assert!(value.get("current").is_none());
    assert_eq!(value["versions"][0]["name"], "v2.5.0");
}

#[test]
fn schema_outputs_json_schema() {
    let value: serde_json::Value = serde_json::from_slice(
        &qb().args(["schema", "summary"]).output().unwrap().stdout,
    )
    .unwrap();
    assert_eq!(value["title"], "SummaryOutputJson");
}

#[test]
fn completion_for_bash() {
    qb().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_qb"));
}
