// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timings for debugging slow commands.
//!
//! Enable with `QB_TIMINGS=1`. Output goes to stderr as
//! `[timings] phase::name XXms`.

use std::time::Instant;

#[inline]
pub fn timings_enabled() -> bool {
    crate::env::qb_timings()
}

/// Print the elapsed time since `start` if timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if timings_enabled() {
        eprintln!("[timings] {} {}ms", phase, start.elapsed().as_millis());
    }
}

/// Times a block and reports it under `phase`.
///
/// ```rust,ignore
/// let db = time_phase!("db::open", { Database::open(&path) })?;
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}
