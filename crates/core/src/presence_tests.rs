// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::session::Role;
use crate::version::Environment;

fn session(name: &str) -> Session {
    Session::new(name, Role::Tester, "v1", Environment::Qa)
}

fn names<'a>(entries: impl IntoIterator<Item = &'a Session>) -> Vec<&'a str> {
    entries.into_iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn heartbeat_stamps_last_seen() {
    let mut presence = Presence::new();
    presence.heartbeat(&session("Ana"), 1_000, STALE_AFTER);
    assert_eq!(presence.entries()[0].last_seen, Some(1_000));
}

#[test]
fn heartbeat_replaces_same_name() {
    let mut presence = Presence::new();
    presence.heartbeat(&session("Ana"), 1_000, STALE_AFTER);
    presence.heartbeat(&session("Bia"), 2_000, STALE_AFTER);
    presence.heartbeat(&session("Ana"), 3_000, STALE_AFTER);

    assert_eq!(names(presence.entries()), vec!["Bia", "Ana"]);
    assert_eq!(presence.entries()[1].last_seen, Some(3_000));
}

#[test]
fn heartbeat_prunes_stale_entries() {
    let mut presence = Presence::new();
    presence.heartbeat(&session("Ana"), 0, STALE_AFTER);
    presence.heartbeat(&session("Bia"), 60_000, STALE_AFTER);
    assert_eq!(names(presence.entries()), vec!["Bia"]);
}

#[test]
fn online_filters_by_window() {
    let mut presence = Presence::new();
    presence.heartbeat(&session("Ana"), 10_000, STALE_AFTER);
    presence.heartbeat(&session("Bia"), 40_000, STALE_AFTER);

    assert_eq!(names(presence.online(69_999, STALE_AFTER)), vec!["Ana", "Bia"]);
    assert_eq!(names(presence.online(70_000, STALE_AFTER)), vec!["Bia"]);
    assert!(presence.online(100_000, STALE_AFTER).is_empty());
}

#[test]
fn online_treats_missing_timestamp_as_stale() {
    let raw = r#"[{"name":"Old","team":"T","environment":"QA","appVersion":"v1","role":"Tester"}]"#;
    let presence: Presence = serde_json::from_str(raw).unwrap();
    assert!(presence.online(1_000_000, STALE_AFTER).is_empty());
}

#[test]
fn leave_removes_entry() {
    let mut presence = Presence::new();
    presence.heartbeat(&session("Ana"), 1_000, STALE_AFTER);
    assert!(presence.leave("Ana"));
    assert!(!presence.leave("Ana"));
    assert!(presence.entries().is_empty());
}

