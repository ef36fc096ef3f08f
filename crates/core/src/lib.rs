// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qb-core: Shared library for the qb test-case board
//!
//! This crate provides the data model, the version ledger, derived metrics,
//! the CSV codec and the SQLite key-value storage used by the qb CLI. All
//! mutation is routed through [`Board`].

pub mod board;
pub mod case;
pub mod clock;
pub mod csv;
pub mod db;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod metrics;
pub mod presence;
pub mod registry;
pub mod session;
pub mod version;

pub use board::{Board, CaseDraft, Claim, ImportReport, LoginRequest};
pub use case::{CaseUpdate, Platform, TestCase, TestStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use error::{Error, Result};
pub use filter::CaseFilter;
pub use ledger::Ledger;
pub use metrics::{Kpi, Summary};
pub use presence::Presence;
pub use session::{Role, Session};
pub use version::{Environment, Version, VersionStatus};
