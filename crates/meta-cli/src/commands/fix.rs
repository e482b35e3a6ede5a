//! Fix command implementation

use std::path::Path;

use colored::Colorize;
use meta_check::{AutoFixer, FixOptions, FixReport};
use meta_report::render_fix;

use super::scan;
use crate::cli::ScanArgs;
use crate::config::RunConfig;
use crate::error::{CliError, Result};

pub(super) fn print_fix_report(report: &FixReport) {
    print!("{}", render_fix(report));
    eprintln!(
        "{} {} created, {} removed, {} skipped, {} failed.",
        "=>".blue().bold(),
        report.created.len(),
        report.removed.len(),
        report.skipped.len(),
        report.failures.len()
    );
}

/// Run the fix command
///
/// Returns `false` when some fix operations failed.
pub fn run_fix(
    cwd: &Path,
    config: &RunConfig,
    args: &ScanArgs,
    allow: &[String],
    dry_run: bool,
) -> Result<bool> {
    let settings = config.scan_settings(args)?;
    let allowed_globs = config.allowed_globs(allow)?;
    if allowed_globs.is_empty() {
        tracing::warn!("No --allow globs given; every path will be skipped");
    }

    let scan = scan(cwd, &settings)?;
    if dry_run {
        println!("{} Dry run: no files will be changed.", "=>".blue().bold());
    }

    let options = FixOptions {
        dry_run,
        root_dir: scan.root,
        allowed_globs,
        ignore_case: settings.ignore_case,
    };
    match AutoFixer::default().fix(&scan.result, &options) {
        Ok(report) => {
            print_fix_report(&report);
            Ok(report.is_success())
        }
        Err(meta_check::Error::AllFixesFailed { attempted, report }) => {
            print_fix_report(&report);
            Err(CliError::user(format!(
                "All {attempted} fix operations failed"
            )))
        }
        Err(e) => Err(e.into()),
    }
}
