// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Saved user and environment names offered at login and for delegation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::version::Environment;

/// Insertion-ordered list of distinct, trimmed names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NameList(Vec<String>);

impl NameList {
    pub fn new() -> Self {
        NameList::default()
    }

    /// Adds a trimmed name. Returns `Ok(false)` if it was already present.
    pub fn add(&mut self, name: &str, field: &'static str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::FieldEmpty { field });
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.0.push(name.to_string());
        Ok(true)
    }

    /// Removes a name; returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|n| n != name);
        before != self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        let mut list = NameList::new();
        for name in names {
            // entries that are empty or repeated are dropped
            let _ = list.add(&name, "name");
        }
        list
    }
}

impl From<NameList> for Vec<String> {
    fn from(list: NameList) -> Self {
        list.0
    }
}

/// People known to the board.
pub type SavedUsers = NameList;

/// Environment tags offered at login. `QA` and `Beta` are always present
/// and cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SavedEnvironments(NameList);

impl SavedEnvironments {
    pub fn add(&mut self, name: &str) -> Result<bool> {
        self.0.add(name, "environment")
    }

    pub fn remove(&mut self, name: &str) -> Result<bool> {
        if Environment::DEFAULTS.contains(&name) {
            return Err(Error::DefaultEnvironment(name.to_string()));
        }
        Ok(self.0.remove(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }
}

impl Default for SavedEnvironments {
    fn default() -> Self {
        SavedEnvironments::from(Vec::new())
    }
}

impl From<Vec<String>> for SavedEnvironments {
    fn from(mut names: Vec<String>) -> Self {
        names.extend(Environment::DEFAULTS.iter().map(|d| d.to_string()));
        SavedEnvironments(NameList::from(names))
    }
}

impl From<SavedEnvironments> for Vec<String> {
    fn from(envs: SavedEnvironments) -> Self {
        envs.0.into()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
