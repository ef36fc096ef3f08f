// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qb-core operations.

use thiserror::Error;

/// All possible errors that can occur in qb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("version not found: {0}")]
    VersionNotFound(String),

    #[error("version already exists: {0}\n  hint: pick another name or log into the existing board")]
    VersionExists(String),

    #[error("cannot delete version {0}: it is the version you are logged into")]
    DeleteCurrentVersion(String),

    #[error("cannot delete version {0}: at least one version must remain")]
    DeleteLastVersion(String),

    #[error("test case not found: {0}")]
    CaseNotFound(String),

    #[error("test case {id} is assigned to {owner}\n  hint: ask {owner} or a QA Lead to release it")]
    CaseLocked { id: String, owner: String },

    #[error("permission denied: {action} requires {required}")]
    PermissionDenied {
        action: &'static str,
        required: &'static str,
    },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pass, fail, blocked, skipped, n/a, not_started")]
    InvalidStatus(String),

    #[error("invalid platform: '{0}'\n  hint: valid platforms are: android, ios")]
    InvalidPlatform(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: lead, tester, viewer")]
    InvalidRole(String),

    #[error("invalid field: '{0}'\n  hint: valid fields are: group, module, scenario, expected, obs, assignee, tester-android, tester-ios")]
    InvalidField(String),

    #[error("cannot remove default environment '{0}'")]
    DefaultEnvironment(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
