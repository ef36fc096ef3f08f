// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release-scoped boards: a named snapshot owning its test cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::case::TestCase;

/// Lifecycle of a version.
///
/// `Archived` is part of the stored format but no operation sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionStatus {
    #[default]
    Active,
    Archived,
}

/// Deployment environment a board is tested against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    #[default]
    Qa,
    Beta,
    Other(String),
}

impl Environment {
    /// Environments that always exist.
    pub const DEFAULTS: [&'static str; 2] = ["QA", "Beta"];

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Qa => "QA",
            Environment::Beta => "Beta",
            Environment::Other(name) => name,
        }
    }

    pub fn is_default(&self) -> bool {
        !matches!(self, Environment::Other(_))
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("qa") || trimmed.is_empty() {
            Environment::Qa
        } else if trimmed.eq_ignore_ascii_case("beta") {
            Environment::Beta
        } else {
            Environment::Other(trimmed.to_string())
        }
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        Environment::from(value.to_string())
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One release scope and the test cases recorded against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Name used as the lookup key, e.g. `v2.5.0`.
    pub name: String,
    #[serde(default)]
    pub status: VersionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl Version {
    pub fn new(
        name: impl Into<String>,
        environment: Environment,
        test_cases: Vec<TestCase>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Version {
            name: name.into(),
            status: VersionStatus::Active,
            created_at,
            environment,
            test_cases,
        }
    }

    pub fn case(&self, id: &str) -> Option<&TestCase> {
        self.test_cases.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
