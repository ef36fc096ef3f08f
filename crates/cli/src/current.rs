// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The logged-in session, kept at `.qaboard/current/session.json`.

use std::fs;
use std::path::{Path, PathBuf};

use qb_core::Session;

use crate::error::Result;

const CURRENT_DIR_NAME: &str = "current";
const SESSION_FILE_NAME: &str = "session.json";

pub fn session_path(work_dir: &Path) -> PathBuf {
    work_dir.join(CURRENT_DIR_NAME).join(SESSION_FILE_NAME)
}

/// Reads the saved session. A missing file means nobody is logged in; an
/// unreadable one is discarded with a warning.
pub fn load(work_dir: &Path) -> Result<Option<Session>> {
    let path = session_path(work_dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&content) {
        Ok(session) => Ok(Some(session)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed session file");
            Ok(None)
        }
    }
}

pub fn save(work_dir: &Path, session: &Session) -> Result<()> {
    let path = session_path(work_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

/// Removes the saved session; returns whether one existed.
pub fn clear(work_dir: &Path) -> Result<bool> {
    match fs::remove_file(session_path(work_dir)) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "current_tests.rs"]
mod tests;
