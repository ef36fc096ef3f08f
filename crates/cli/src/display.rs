// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use qb_core::metrics::{self, Kpi, Summary};
use qb_core::{Platform, Session, TestCase, TestStatus, Version};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Executed cases shown in the big-screen activity panel.
pub const RECENT_LIMIT: usize = 6;

/// Wrap a single line at word boundaries. Text that already contains
/// newlines is returned as-is.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn indented(content: &str) -> Vec<String> {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|line| format!("    {}", line))
        .collect()
}

/// Format a single test case line for list output
pub fn format_case_line(case: &TestCase) -> String {
    let mut state = format!(
        "and: {}, ios: {}",
        case.android.label(),
        case.ios.label()
    );
    if let Some(owner) = &case.assigned_to {
        state.push_str(&format!(", @{}", owner));
    }
    format!("- [{}] ({}) {}: {}", case.module, state, case.id, case.scenario)
}

/// Format test case details for the show command
pub fn format_case_details(case: &TestCase) -> String {
    let mut output = vec![
        format!("[{}] {}", case.module, case.id),
        format!("Group: {}", case.group),
    ];
    if let Some(owner) = &case.assigned_to {
        output.push(format!("Assigned: {}", owner));
    }

    output.push(String::new());
    output.push("Scenario:".to_string());
    output.extend(indented(&case.scenario));
    output.push("Expected:".to_string());
    output.extend(indented(&case.expected));

    output.push(String::new());
    for platform in Platform::ALL {
        let status = case.status(platform);
        let tester = case.tester(platform);
        if tester.is_empty() {
            output.push(format!("{}: {}", platform.label(), status.label()));
        } else {
            output.push(format!(
                "{}: {} by {}",
                platform.label(),
                status.label(),
                tester
            ));
        }
    }
    if !case.executed_on.is_empty() {
        output.push(format!(
            "Executed: {} on {} ({})",
            case.executed_on, case.executed_version, case.executed_environment
        ));
    }

    if !case.observation.trim().is_empty() {
        output.push(String::new());
        output.push("Observation:".to_string());
        output.extend(indented(&case.observation));
    }

    output.join("\n")
}

/// Trend line text: `+5% vs previous 28%`.
pub fn format_trend(rate: u32, previous: Option<u32>) -> Option<String> {
    let diff = metrics::trend(rate, previous)?;
    let sign = if diff > 0 { "+" } else { "" };
    Some(format!(
        "{}{}% vs previous {}%",
        sign,
        diff,
        previous.unwrap_or_default()
    ))
}

/// Format aggregate metrics for the summary command.
pub fn format_summary(
    summary: &Summary,
    platform: Option<Platform>,
    kpi: &Kpi,
    previous_rate: Option<u32>,
) -> String {
    let scope = platform.map(|p| p.label()).unwrap_or("combined");
    let rows = [
        ("Total", summary.total),
        ("Passed", summary.passed),
        ("Failed", summary.failed),
        ("Blocked", summary.blocked),
        ("Not started", summary.not_started),
        ("Skipped", summary.skipped),
        ("Not available", summary.not_available),
    ];

    let mut output = vec![format!("Summary ({})", scope)];
    for (label, value) in rows {
        output.push(format!("  {:<18}{:>5}", format!("{}:", label), value));
    }
    output.push(format!(
        "  {:<18}{:>5.1}%",
        "Success rate:", summary.success_rate
    ));
    output.push(format!(
        "  {:<18}{:>5}",
        "Critical failures:", summary.critical_failures
    ));

    output.push(String::new());
    let mut quality = format!("Quality: {}%", kpi.rate);
    if let Some(trend) = format_trend(kpi.rate, previous_rate) {
        quality.push_str(&format!(" ({})", trend));
    }
    output.push(quality);
    output.push(format!(
        "Slots: {} passed, {} failed, {} blocked of {}",
        kpi.passed, kpi.failed, kpi.blocked, kpi.total
    ));
    output.join("\n")
}

/// Format one version for `qb version list`.
pub fn format_version_line(version: &Version, current: bool) -> String {
    let marker = if current { "*" } else { " " };
    format!(
        "{} {}  [{}]  {} cases  quality {}%  created {}",
        marker,
        version.name,
        version.environment,
        version.test_cases.len(),
        metrics::quality_rate(&version.test_cases),
        version.created_at.format("%Y-%m-%d")
    )
}

/// Format one online user.
pub fn format_session_line(session: &Session) -> String {
    format!(
        "- {} ({}) {} [{}]",
        session.name, session.role, session.app_version, session.environment
    )
}

/// Text progress bar for a percentage.
pub fn progress_bar(rate: u32, width: usize) -> String {
    let filled = (rate.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Cases with an Android result, in board order, capped at [`RECENT_LIMIT`].
pub fn recent_executions(cases: &[TestCase]) -> Vec<&TestCase> {
    cases
        .iter()
        .filter(|c| c.android != TestStatus::NotStarted)
        .take(RECENT_LIMIT)
        .collect()
}

/// Cases failing on either platform.
pub fn failures(cases: &[TestCase]) -> Vec<&TestCase> {
    cases.iter().filter(|c| c.has_failure()).collect()
}

/// Full-screen dashboard for the board command.
pub fn format_big_screen(
    session: &Session,
    version: Option<&Version>,
    kpi: &Kpi,
    previous_rate: Option<u32>,
    online: usize,
) -> String {
    let cases = version.map(|v| v.test_cases.as_slice()).unwrap_or_default();
    let environment = version
        .map(|v| v.environment.to_string())
        .unwrap_or_else(|| session.environment.to_string());

    let mut output = vec![
        "QA COMMAND CENTER".to_string(),
        format!(
            "Version: {}  Environment: {}  Online: {}",
            session.app_version, environment, online
        ),
        format!("Hello, {} ({})", session.name, session.role),
        String::new(),
    ];

    let mut quality = format!("Quality {}% {}", kpi.rate, progress_bar(kpi.rate, 20));
    if let Some(trend) = format_trend(kpi.rate, previous_rate) {
        quality.push_str(&format!("  {}", trend));
    }
    output.push(quality);
    output.push(format!(
        "Blocked: {}  Failed: {}  Passed: {}",
        kpi.blocked, kpi.failed, kpi.passed
    ));

    output.push(String::new());
    output.push("Recent Activity".to_string());
    let recent = recent_executions(cases);
    if recent.is_empty() {
        output.push("  No executions yet.".to_string());
    }
    for case in recent {
        let tester = if case.tester_android.is_empty() {
            String::new()
        } else {
            format!(" | {}", case.tester_android)
        };
        output.push(format!(
            "  {} - {}  And: {}{}",
            case.id,
            case.module,
            case.android.label(),
            tester
        ));
    }

    output.push(String::new());
    output.push("Blockers & Failures".to_string());
    let failing = failures(cases);
    if failing.is_empty() {
        output.push("  System stable. No critical failures.".to_string());
    }
    for case in failing {
        output.push(format!("  {} {}", case.id, case.scenario));
        let owner = [&case.tester_android, &case.tester_ios]
            .into_iter()
            .find(|t| !t.is_empty());
        if let Some(owner) = owner {
            output.push(format!("    Owner: {}", owner));
        }
    }

    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
