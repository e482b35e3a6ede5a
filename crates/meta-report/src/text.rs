//! Plain-text reports

use std::fmt::Write;

use meta_check::{CheckResult, FixReport};

/// One `missing <companion>` line per missing entry, then one
/// `dangling <companion>` line per dangling entry.
pub fn render_check(result: &CheckResult) -> String {
    let mut out = String::new();
    for companion in result.expected_companions() {
        let _ = writeln!(out, "missing {companion}");
    }
    for companion in &result.dangling_meta {
        let _ = writeln!(out, "dangling {companion}");
    }
    out
}

/// One line per companion touched or passed over by a fix run.
pub fn render_fix(report: &FixReport) -> String {
    let mut out = String::new();
    for path in &report.created {
        let _ = writeln!(out, "created {path}");
    }
    for path in &report.removed {
        let _ = writeln!(out, "removed {path}");
    }
    for (path, reason) in &report.skipped {
        let _ = writeln!(out, "skipped {path} ({reason})");
    }
    for (path, error) in &report.failures {
        let _ = writeln!(out, "failed {path} ({error})");
    }
    out
}
