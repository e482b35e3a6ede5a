//! Check command implementation

use std::path::Path;

use colored::Colorize;
use meta_check::{AutoFixer, CheckResult, FixOptions};
use meta_report::{render_check, render_junit, render_markdown};

use super::fix::print_fix_report;
use super::scan;
use crate::cli::{OutputArgs, ScanArgs};
use crate::config::RunConfig;
use crate::error::Result;

fn print_summary(result: &CheckResult) {
    if result.is_empty() {
        eprintln!("{} No missing or dangling .meta files.", "OK".green().bold());
    } else {
        eprintln!(
            "{} {} missing, {} dangling .meta files.",
            "FAILED".red().bold(),
            result.missing_meta.len(),
            result.dangling_meta.len()
        );
    }
}

/// Run the check command
///
/// Returns `false` when missing or dangling files survive filtering.
pub fn run_check(cwd: &Path, config: &RunConfig, args: &ScanArgs, output: &OutputArgs) -> Result<bool> {
    let settings = config.scan_settings(args)?;
    let junit_path = config.junit_path(output.junit.as_deref())?;
    let template = config.markdown_template(
        output.markdown,
        output.lang.as_deref(),
        output.template.as_deref(),
    )?;
    let autofix_globs = if config.enable_autofix {
        Some(config.allowed_globs(&[])?)
    } else {
        None
    };

    let scan = scan(cwd, &settings)?;

    match &template {
        Some(template) => print!("{}", render_markdown(&scan.result, template)),
        None => print!("{}", render_check(&scan.result)),
    }

    if let Some(path) = junit_path {
        let path = cwd.join(path);
        meta_fs::io::write_atomic(&path, render_junit(&scan.result).as_bytes())?;
        tracing::info!(path = %path.display(), "Wrote JUnit report");
    }

    if let Some(allowed_globs) = autofix_globs {
        let options = FixOptions {
            dry_run: false,
            root_dir: scan.root.clone(),
            allowed_globs,
            ignore_case: settings.ignore_case,
        };
        let report = AutoFixer::default().fix(&scan.result, &options)?;
        print_fix_report(&report);
    }

    print_summary(&scan.result);
    Ok(scan.result.is_empty())
}
