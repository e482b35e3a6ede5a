//! Command implementations

mod check;
mod fix;

use std::path::{Path, PathBuf};

use meta_check::{
    CheckOptions, CheckResult, Checker, FilterOptions, filter, load_ignored_globs,
};
use meta_fs::validate_root_dir;

use crate::config::ScanSettings;
use crate::error::Result;

pub use check::run_check;
pub use fix::run_fix;

/// A filtered check result and the canonical root it is relative to.
pub struct Scan {
    pub root: PathBuf,
    pub result: CheckResult,
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    validate_root_dir(path).map_err(|e| match e {
        meta_fs::Error::NotADirectory { path } => meta_check::Error::RootNotDirectory { path }.into(),
        other => other.into(),
    })
}

/// Check the configured root and apply the ignore policy.
///
/// Relative paths in `settings` are resolved against `cwd`, which is also
/// the base ignore globs are matched from.
pub fn scan(cwd: &Path, settings: &ScanSettings) -> Result<Scan> {
    let cwd = canonical_dir(cwd)?;
    let root = canonical_dir(&cwd.join(&settings.root))?;

    let ignore_file = settings.ignore_file.as_ref().map(|path| cwd.join(path));
    let ignored_globs = load_ignored_globs(ignore_file.as_deref(), &root)?;

    let options = CheckOptions {
        ignore_case: settings.ignore_case,
        ignore_submodules_and_nested: settings.ignore_submodules_and_nested,
        target_type: settings.target_type,
    };
    let result = Checker::new().check(&root, &options)?;

    let filter_options = FilterOptions {
        ignore_dangling: settings.ignore_dangling,
        ignored_globs,
        ignore_case: settings.ignore_case,
        root_dir: root.clone(),
    };
    let result = filter(&result, &filter_options, &cwd);
    Ok(Scan { root, result })
}
