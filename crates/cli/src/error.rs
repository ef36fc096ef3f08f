// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised by the `qb` command line.
///
/// Board rule violations come from [`qb_core::Error`] and are displayed
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'qb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("not logged in\n  hint: run 'qb login <name>' first")]
    NotLoggedIn,

    #[error("version {0} no longer exists\n  hint: run 'qb login <name> --app-version <version>' to switch")]
    SessionVersionGone(String),

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] qb_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
