// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The version ledger: an insertion-ordered list of boards.
//!
//! Ledger operations accept duplicate names and delete unconditionally.
//! Unique names and keeping the current and last version are enforced by
//! [`Board`](crate::board::Board).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::TestCase;
use crate::version::{Environment, Version};

/// Name of the version created on first run.
pub const FIRST_RUN_VERSION: &str = "v2.5.0";

/// Seed cases copied into every new version.
pub fn template() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "CT-001",
            "Geral",
            "Performance",
            "Performance: Validar tempo de carregamento inicial do app (< 5s).",
            "Tela inicial carregada em tempo aceitável.",
        ),
        TestCase::new(
            "CT-002",
            "Geral",
            "Performance",
            "Performance: Carregamento máximo das telas críticas (PLP).",
            "PLP carrega em tempo aceitável (< 5s).",
        ),
        TestCase::new(
            "CT-003",
            "Cadastro",
            "Cadastro Usuário",
            "Cadastro o cliente com CEP generico",
            "Usuário logado e vínculado a uma organização",
        ),
    ]
}

/// Ordered collection of versions, persisted as one JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    versions: Vec<Version>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// The ledger used when storage holds nothing: one QA version seeded
    /// from the template.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut ledger = Ledger::new();
        ledger.create_version(FIRST_RUN_VERSION, &template(), Environment::Qa, now);
        ledger
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.versions.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.iter().any(|v| v.name == name)
    }

    /// Appends a version holding a copy of `seed`. Duplicate names are
    /// accepted.
    pub fn create_version(
        &mut self,
        name: &str,
        seed: &[TestCase],
        environment: Environment,
        now: DateTime<Utc>,
    ) -> &Version {
        tracing::info!(version = name, environment = %environment, "creating version");
        let index = self.versions.len();
        self.versions
            .push(Version::new(name, environment, seed.to_vec(), now));
        &self.versions[index]
    }

    /// First version with the given name.
    pub fn select_version(&self, name: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.name == name)
    }

    /// Removes every version with the given name; returns how many were removed.
    pub fn delete_version(&mut self, name: &str) -> usize {
        let before = self.versions.len();
        self.versions.retain(|v| v.name != name);
        let removed = before - self.versions.len();
        tracing::info!(version = name, removed, "deleted version");
        removed
    }

    /// Replaces the test cases of every version with the given name.
    /// Returns false if no version matched.
    pub fn mutate_test_cases(&mut self, name: &str, cases: Vec<TestCase>) -> bool {
        let mut matched = false;
        for version in self.versions.iter_mut().filter(|v| v.name == name) {
            version.test_cases = cases.clone();
            matched = true;
        }
        matched
    }

    /// Sets the environment tag of the named version.
    pub fn set_environment(&mut self, name: &str, environment: Environment) -> bool {
        let mut matched = false;
        for version in self.versions.iter_mut().filter(|v| v.name == name) {
            version.environment = environment.clone();
            matched = true;
        }
        matched
    }

    /// The second-to-last version, by position.
    pub fn previous_version(&self) -> Option<&Version> {
        self.versions.len().checked_sub(2).map(|i| &self.versions[i])
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
