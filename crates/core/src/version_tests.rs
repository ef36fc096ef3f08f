// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    qa = { "QA", Environment::Qa },
    qa_lower = { "qa", Environment::Qa },
    empty = { "", Environment::Qa },
    beta = { "Beta", Environment::Beta },
    custom = { " Staging ", Environment::Other("Staging".into()) },
)]
fn environment_from_string(input: &str, expected: Environment) {
    assert_eq!(Environment::from(input), expected);
}

#[test]
fn environment_defaults() {
    assert!(Environment::Qa.is_default());
    assert!(Environment::Beta.is_default());
    assert!(!Environment::Other("Prod".into()).is_default());
}

#[test]
fn version_uses_stored_field_names() {
    let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let version = Version::new("v1.0.0", Environment::Beta, vec![], created);
    let json = serde_json::to_value(&version).unwrap();
    assert_eq!(json["name"], "v1.0.0");
    assert_eq!(json["status"], "active");
    assert_eq!(json["environment"], "Beta");
    assert!(json["createdAt"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    assert!(json["testCases"].as_array().unwrap().is_empty());
}

#[test]
fn version_without_environment_defaults_to_qa() {
    let raw = r#"{"name":"v0.9","status":"archived","createdAt":"2025-12-01T10:00:00.000Z","testCases":[]}"#;
    let version: Version = serde_json::from_str(raw).unwrap();
    assert_eq!(version.environment, Environment::Qa);
    assert_eq!(version.status, VersionStatus::Archived);
}

#[test]
fn version_case_lookup() {
    let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let version = Version::new(
        "v1",
        Environment::Qa,
        vec![TestCase::new("CT-001", "G", "M", "S", "E")],
        created,
    );
    assert!(version.case("CT-001").is_some());
    assert!(version.case("CT-002").is_none());
}
