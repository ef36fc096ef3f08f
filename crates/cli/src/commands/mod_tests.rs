// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! `TestContext` wraps a board over an in-memory database with a fixed
//! clock, and logs in a QA Lead and a Tester on the first-run version.
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! let mut ctx = TestContext::new();
//! set::run_impl(&mut ctx.board, &ctx.tester, "CT-001", "android", "pass").unwrap();
//! assert_eq!(ctx.case("CT-001").android, TestStatus::Pass);
//! ```

use chrono::{TimeZone, Utc};
use qb_core::{Board, Database, FixedClock, LoginRequest, Role, Session, TestCase};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test context providing a seeded board, two sessions and a scratch
/// `.qaboard` directory.
pub struct TestContext {
    pub board: Board<FixedClock>,
    pub lead: Session,
    pub tester: Session,
    pub work_dir: PathBuf,
    _temp_dir: TempDir, // Keep alive for duration of test
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 4, 10, 12, 0, 0).unwrap());
        let mut board = Board::with_clock(db, clock).expect("Failed to load board");
        let lead = board
            .login(LoginRequest::new("Lia", Role::QaLead))
            .expect("Failed to log in lead");
        let tester = board
            .login(LoginRequest::new("Téo", Role::Tester))
            .expect("Failed to log in tester");
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().join(".qaboard");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        TestContext {
            board,
            lead,
            tester,
            work_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Logs in a read-only session.
    pub fn viewer(&mut self) -> Session {
        self.board
            .login(LoginRequest::new("TV", Role::Viewer))
            .expect("Failed to log in viewer")
    }

    /// Current state of a case in the first-run version.
    pub fn case(&self, id: &str) -> TestCase {
        self.board
            .case(&self.lead, id)
            .expect("case should exist")
            .clone()
    }

    /// Directory that holds `.qaboard`.
    pub fn project_dir(&self) -> PathBuf {
        self.work_dir
            .parent()
            .expect("work dir has a parent")
            .to_path_buf()
    }
}
