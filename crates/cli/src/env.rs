// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by `qb`.
//!
//! The variable name constants are generated by `build.rs` into [`vars`].

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Log filter directive for the tracing subscriber, default `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Value of `QB_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::QB_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns `true` if `QB_TIMINGS` is set (any value).
pub fn qb_timings() -> bool {
    std::env::var(vars::QB_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
