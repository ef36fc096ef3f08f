// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn qb() -> Command {
    let mut cmd = cargo_bin_cmd!("qb");
    cmd.env_remove("QB_LOG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    qb().arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Log in with the given role on the first version.
pub fn login(temp: &TempDir, name: &str, role: &str) {
    qb().args(["login", name, "--role", role])
        .current_dir(temp.path())
        .assert()
        .success();
}

/// Helper to create an initialized board with a QA Lead logged in
pub fn init_as_lead() -> TempDir {
    let temp = init_temp();
    login(&temp, "Lia", "lead");
    temp
}

/// Run a command in `temp` and return its stdout.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = qb().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "qb {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
