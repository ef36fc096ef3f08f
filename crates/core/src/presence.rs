// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory "who is online" list.
//!
//! Each client refreshes its own entry on a fixed interval. Entries are
//! last-write-wins by name, and anything not refreshed within the staleness
//! window is hidden on read and dropped on the next heartbeat.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::session::Session;

/// How often a client should refresh its entry.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Entries older than this are considered offline.
pub const STALE_AFTER: Duration = Duration::from_secs(60);

/// Stored presence entries, in heartbeat order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presence {
    entries: Vec<Session>,
}

impl Presence {
    pub fn new() -> Self {
        Presence::default()
    }

    pub fn entries(&self) -> &[Session] {
        &self.entries
    }

    /// Records `session` as seen at `now_ms`, replacing any entry with the
    /// same name and pruning stale entries.
    pub fn heartbeat(&mut self, session: &Session, now_ms: i64, stale_after: Duration) {
        let window = window_ms(stale_after);
        self.entries
            .retain(|e| e.name != session.name && is_fresh(e, now_ms, window));
        let mut entry = session.clone();
        entry.last_seen = Some(now_ms);
        self.entries.push(entry);
    }

    /// Entries seen within the staleness window.
    pub fn online(&self, now_ms: i64, stale_after: Duration) -> Vec<&Session> {
        let window = window_ms(stale_after);
        self.entries
            .iter()
            .filter(|e| is_fresh(e, now_ms, window))
            .collect()
    }

    /// Removes the named entry; returns whether one was present.
    pub fn leave(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before != self.entries.len()
    }
}

fn window_ms(stale_after: Duration) -> i64 {
    i64::try_from(stale_after.as_millis()).unwrap_or(i64::MAX)
}

// Entries without a timestamp count as seen at the epoch.
fn is_fresh(entry: &Session, now_ms: i64, window: i64) -> bool {
    now_ms.saturating_sub(entry.last_seen.unwrap_or(0)) < window
}

#[cfg(test)]
#[path = "presence_tests.rs"]
mod tests;
