// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Who is acting on the board, and with which permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::version::Environment;

/// Default team label attached to sessions.
pub const DEFAULT_TEAM: &str = "Time Quality";

/// Permission level chosen at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Creates boards, defines and delegates test cases.
    #[serde(rename = "QA Lead")]
    QaLead,
    /// Records results on cases they own or that are unowned.
    Tester,
    /// Read-only, big-screen summary.
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::QaLead => "QA Lead",
            Role::Tester => "Tester",
            Role::Viewer => "Viewer",
        }
    }

    pub fn is_lead(&self) -> bool {
        *self == Role::QaLead
    }

    pub fn can_write(&self) -> bool {
        *self != Role::Viewer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "lead" | "qa lead" | "qalead" => Ok(Role::QaLead),
            "tester" => Ok(Role::Tester),
            "viewer" | "view" => Ok(Role::Viewer),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// A logged-in user bound to one version.
///
/// Also the record stored in the presence list, where `last_seen` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub team: String,
    pub environment: Environment,
    /// Name of the version this session works on.
    pub app_version: String,
    pub role: Role,
    /// Epoch milliseconds of the last heartbeat.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_seen: Option<i64>,
}

impl Session {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        app_version: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Session {
            name: name.into(),
            team: DEFAULT_TEAM.to_string(),
            environment,
            app_version: app_version.into(),
            role,
            last_seen: None,
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// First name, as shown in compact columns.
    pub fn short_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    pub(crate) fn require_write(&self, action: &'static str) -> Result<()> {
        if self.role.can_write() {
            Ok(())
        } else {
            Err(Error::PermissionDenied {
                action,
                required: "Tester or QA Lead",
            })
        }
    }

    pub(crate) fn require_lead(&self, action: &'static str) -> Result<()> {
        if self.role.is_lead() {
            Ok(())
        } else {
            Err(Error::PermissionDenied {
                action,
                required: "QA Lead",
            })
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
