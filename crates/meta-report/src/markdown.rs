//! Markdown comment body

use std::fmt::Write;

use meta_check::CheckResult;

use crate::l10n::Template;

fn substitute(message: &str, result: &CheckResult) -> String {
    message
        .replace("{missing_count}", &result.missing_meta.len().to_string())
        .replace("{dangling_count}", &result.dangling_meta.len().to_string())
}

/// Render `result` as a Markdown comment.
///
/// A clean result is the success message alone; otherwise the failure
/// message is followed by a table of companion paths.
pub fn render_markdown(result: &CheckResult, template: &Template) -> String {
    if result.is_empty() {
        return format!("{}\n", substitute(&template.success, result));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", substitute(&template.failure, result));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "| {} | {} |",
        template.header_status, template.header_file_path
    );
    let _ = writeln!(out, "|:--|:--|");
    for companion in result.expected_companions() {
        let _ = writeln!(out, "| {} | `{companion}` |", template.status_missing);
    }
    for companion in &result.dangling_meta {
        let _ = writeln!(out, "| {} | `{companion}` |", template.status_dangling);
    }
    out
}
