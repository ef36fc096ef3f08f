// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn list_default() {
    let cli = parse(&["qb", "list"]).unwrap();
    match cli.command {
        Command::List { filter, output } => {
            assert!(filter.status.is_none());
            assert!(filter.group.is_none());
            assert!(filter.query.is_none());
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn list_with_filters() {
    let cli = parse(&["qb", "list", "-s", "fail", "-g", "1. Login", "-q", "sso", "-o", "json"]).unwrap();
    match cli.command {
        Command::List { filter, output } => {
            assert_eq!(filter.status.as_deref(), Some("fail"));
            assert_eq!(filter.group.as_deref(), Some("1. Login"));
            assert_eq!(filter.query.as_deref(), Some("sso"));
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn list_rejects_unknown_output() {
    assert!(parse(&["qb", "list", "-o", "xml"]).is_err());
}

#[test]
fn set_takes_id_platform_status() {
    let cli = parse(&["qb", "set", "CT-001", "ios", "fail"]).unwrap();
    match cli.command {
        Command::Set {
            id,
            platform,
            status,
        } => {
            assert_eq!(id, "CT-001");
            assert_eq!(platform, "ios");
            assert_eq!(status, "fail");
        }
        _ => panic!("Expected Set command"),
    }
}

#[parameterized(
    missing_status = { &["qb", "set", "CT-001", "ios"] },
    missing_value = { &["qb", "edit", "CT-001", "obs"] },
    claim_without_id = { &["qb", "claim"] },
    delete_without_id = { &["qb", "delete"] },
)]
fn missing_arguments_fail(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[test]
fn new_requires_every_field() {
    assert!(parse(&["qb", "new", "Scenario", "-g", "G", "-m", "M"]).is_err());
    let cli = parse(&["qb", "new", "Scenario", "-g", "G", "-m", "M", "-e", "E"]).unwrap();
    match cli.command {
        Command::New {
            scenario,
            group,
            module,
            expected,
        } => {
            assert_eq!(
                (scenario.as_str(), group.as_str(), module.as_str(), expected.as_str()),
                ("Scenario", "G", "M", "E")
            );
        }
        _ => panic!("Expected New command"),
    }
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
)]
fn new_rejects_blank_scenario(scenario: &str) {
    assert!(parse(&["qb", "new", scenario, "-g", "G", "-m", "M", "-e", "E"]).is_err());
}

#[test]
fn show_with_json_output() {
    let cli = parse(&["qb", "show", "CT-002", "-o", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Show { ref id, output: OutputFormat::Json } if id == "CT-002"
    ));
}
