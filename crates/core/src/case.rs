// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case types: the per-platform outcome of one manual scenario.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Device platform a scenario is executed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Both platforms, in display order.
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Human-facing name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "android" | "and" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(Error::InvalidPlatform(s.to_string())),
        }
    }
}

/// Outcome of a scenario on one platform.
///
/// Stored and exported using the board's original labels (`Pass`, `Falha`,
/// `Skipped`, `Bloqueado`, `Não Disponível`, `Não Iniciado`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestStatus {
    Pass,
    Fail,
    Skipped,
    Blocked,
    NotAvailable,
    #[default]
    NotStarted,
}

impl TestStatus {
    pub const ALL: [TestStatus; 6] = [
        TestStatus::NotStarted,
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Blocked,
        TestStatus::Skipped,
        TestStatus::NotAvailable,
    ];

    /// Stored label.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "Pass",
            TestStatus::Fail => "Falha",
            TestStatus::Skipped => "Skipped",
            TestStatus::Blocked => "Bloqueado",
            TestStatus::NotAvailable => "Não Disponível",
            TestStatus::NotStarted => "Não Iniciado",
        }
    }

    /// Machine-friendly name used by the CLI and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skipped => "skipped",
            TestStatus::Blocked => "blocked",
            TestStatus::NotAvailable => "not_available",
            TestStatus::NotStarted => "not_started",
        }
    }

    /// Whether a platform has actually been executed.
    pub fn is_executed(&self) -> bool {
        *self != TestStatus::NotStarted
    }

    /// Lenient parse for data that enters through files or storage:
    /// empty or unrecognized values become `NotStarted`.
    pub fn coerce(s: &str) -> Self {
        if s.trim().is_empty() {
            return TestStatus::NotStarted;
        }
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(value = s, "unrecognized status, treating as not started");
            TestStatus::NotStarted
        })
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "passed" => Ok(TestStatus::Pass),
            "fail" | "failed" | "falha" => Ok(TestStatus::Fail),
            "skipped" | "skip" => Ok(TestStatus::Skipped),
            "blocked" | "bloqueado" => Ok(TestStatus::Blocked),
            "not_available" | "n/a" | "na" | "não disponível" | "nao disponivel" => {
                Ok(TestStatus::NotAvailable)
            }
            "not_started" | "pending" | "pendente" | "não iniciado" | "nao iniciado" => {
                Ok(TestStatus::NotStarted)
            }
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl Serialize for TestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TestStatus::coerce(&raw))
    }
}

/// One manual test scenario with its per-platform results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Sequential identifier, e.g. `CT-003`.
    pub id: String,
    #[serde(rename = "grupo")]
    pub group: String,
    #[serde(rename = "modulo")]
    pub module: String,
    #[serde(rename = "cenario")]
    pub scenario: String,
    #[serde(rename = "resultado_esperado")]
    pub expected: String,
    #[serde(rename = "status_android")]
    pub android: TestStatus,
    #[serde(rename = "status_ios")]
    pub ios: TestStatus,
    #[serde(rename = "tester_android", default)]
    pub tester_android: String,
    #[serde(rename = "tester_ios", default)]
    pub tester_ios: String,
    #[serde(rename = "data_execucao", default)]
    pub executed_on: String,
    #[serde(rename = "versao_executada", default)]
    pub executed_version: String,
    #[serde(rename = "ambiente_executado", default)]
    pub executed_environment: String,
    /// Observation or ticket link.
    #[serde(rename = "jira_obs", default)]
    pub observation: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_locked: Option<bool>,
}

impl TestCase {
    /// Creates a not-yet-executed case.
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        module: impl Into<String>,
        scenario: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        TestCase {
            id: id.into(),
            group: group.into(),
            module: module.into(),
            scenario: scenario.into(),
            expected: expected.into(),
            android: TestStatus::NotStarted,
            ios: TestStatus::NotStarted,
            tester_android: String::new(),
            tester_ios: String::new(),
            executed_on: String::new(),
            executed_version: String::new(),
            executed_environment: String::new(),
            observation: String::new(),
            assigned_to: None,
            is_locked: None,
        }
    }

    pub fn status(&self, platform: Platform) -> TestStatus {
        match platform {
            Platform::Android => self.android,
            Platform::Ios => self.ios,
        }
    }

    pub fn set_status(&mut self, platform: Platform, status: TestStatus) {
        match platform {
            Platform::Android => self.android = status,
            Platform::Ios => self.ios = status,
        }
    }

    pub fn tester(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.tester_android,
            Platform::Ios => &self.tester_ios,
        }
    }

    pub fn set_tester(&mut self, platform: Platform, name: impl Into<String>) {
        match platform {
            Platform::Android => self.tester_android = name.into(),
            Platform::Ios => self.tester_ios = name.into(),
        }
    }

    /// True if either platform recorded a failure.
    pub fn has_failure(&self) -> bool {
        self.android == TestStatus::Fail || self.ios == TestStatus::Fail
    }

    /// The assignee, if it is someone other than `name`.
    pub fn locked_by_other(&self, name: &str) -> Option<&str> {
        self.assigned_to.as_deref().filter(|owner| *owner != name)
    }
}

/// An editable field of a test case, as addressed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseUpdate {
    Status(Platform, TestStatus),
    Tester(Platform, String),
    Group(String),
    Module(String),
    Scenario(String),
    Expected(String),
    Observation(String),
    /// `None` clears the assignee.
    Assignee(Option<String>),
}

impl CaseUpdate {
    /// Builds an update from a field name and a raw value.
    ///
    /// Status fields are `android`/`ios`; executor fields are
    /// `tester-android`/`tester-ios`.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let field = field.trim().to_lowercase().replace('_', "-");
        let text = value.trim().to_string();
        match field.as_str() {
            "android" | "ios" => {
                let platform = field.parse()?;
                Ok(CaseUpdate::Status(platform, value.parse()?))
            }
            "tester-android" | "tester-ios" => {
                let platform = field.trim_start_matches("tester-").parse()?;
                Ok(CaseUpdate::Tester(platform, text))
            }
            "group" | "grupo" => Ok(CaseUpdate::Group(text)),
            "module" | "modulo" => Ok(CaseUpdate::Module(text)),
            "scenario" | "cenario" => Ok(CaseUpdate::Scenario(text)),
            "expected" => Ok(CaseUpdate::Expected(text)),
            "obs" | "observation" | "jira" => Ok(CaseUpdate::Observation(value.to_string())),
            "assignee" => {
                if text.is_empty() || text.eq_ignore_ascii_case("none") {
                    Ok(CaseUpdate::Assignee(None))
                } else {
                    Ok(CaseUpdate::Assignee(Some(text)))
                }
            }
            _ => Err(Error::InvalidField(field)),
        }
    }

    /// Edits a tester may make on a case they own or that is unowned.
    pub fn is_execution_edit(&self) -> bool {
        matches!(self, CaseUpdate::Status(..) | CaseUpdate::Observation(_))
    }

    /// Edits reserved for the QA Lead (delegation and test definition).
    pub fn is_lead_only(&self) -> bool {
        !self.is_execution_edit()
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
