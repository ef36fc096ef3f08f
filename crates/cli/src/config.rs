// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board configuration management.
//!
//! Configuration is stored in `.qaboard/config.toml`:
//! - `team`: team name stamped on new sessions
//! - `critical_modules`: markers that flag a failure as critical
//! - `stale_after_secs`, `heartbeat_secs`: presence timing
//! - `database`: optional path to store the database elsewhere

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use qb_core::metrics::DEFAULT_CRITICAL_MODULES;
use qb_core::presence::{HEARTBEAT_INTERVAL, STALE_AFTER};
use qb_core::session::DEFAULT_TEAM;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".qaboard";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "board.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Board configuration stored in `.qaboard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub team: String,
    pub critical_modules: Vec<String>,
    pub stale_after_secs: u64,
    pub heartbeat_secs: u64,
    /// Database path, relative to the project root or absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            team: DEFAULT_TEAM.to_string(),
            critical_modules: DEFAULT_CRITICAL_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
            stale_after_secs: STALE_AFTER.as_secs(),
            heartbeat_secs: HEARTBEAT_INTERVAL.as_secs(),
            database: None,
        }
    }
}

impl Config {
    pub fn new(team: Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(team) = team {
            let team = team.trim();
            if team.is_empty() {
                return Err(Error::Config("team cannot be empty".to_string()));
            }
            config.team = team.to_string();
        }
        Ok(config)
    }

    /// Loads configuration from the given `.qaboard/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.stale_after_secs == 0 {
            return Err(Error::Config(
                "stale_after_secs must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.qaboard/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs.max(1))
    }
}

/// Find the .qaboard directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let path = Path::new(database);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                work_dir.parent().unwrap_or(work_dir).join(path)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .qaboard directory at the given path
pub fn init_work_dir(path: &Path, team: Option<String>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);
    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let config = Config::new(team)?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;
    write_gitignore(&work_dir)?;
    Ok(work_dir)
}

/// Write a .gitignore that keeps the session and database out of git.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    fs::write(
        work_dir.join(GITIGNORE_FILE_NAME),
        "# User-specific runtime state\ncurrent/\n\n# Database\nboard.db\nboard.db-*\n",
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
