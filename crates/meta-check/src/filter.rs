//! Post-check filtering policy

use std::path::{Path, PathBuf};

use meta_fs::{META_SUFFIX, NormalizedPath};

use crate::checker::CheckResult;
use crate::glob::{Glob, matches_any};

/// Options for [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Drop every dangling companion from the result
    pub ignore_dangling: bool,
    /// Patterns whose matches are removed from both sets
    pub ignored_globs: Vec<Glob>,
    /// Match patterns case-insensitively
    pub ignore_case: bool,
    /// Root the result paths are relative to, absolute or relative to `cwd`
    pub root_dir: PathBuf,
}

/// Narrow `result` by the ignore policy in `options`.
///
/// Globs are matched against each path expressed relative to `cwd`; when the
/// root lies outside `cwd` the root-relative path is used. A missing entry
/// is dropped when either the asset or its expected companion matches.
///
/// The input is left untouched and applying the filter twice yields the same
/// result as applying it once.
pub fn filter(result: &CheckResult, options: &FilterOptions, cwd: &Path) -> CheckResult {
    let base = match_base(&options.root_dir, cwd);
    let ignored = |path: &NormalizedPath| {
        let key = if base.is_empty() {
            path.clone()
        } else {
            base.join(path.as_str())
        };
        matches_any(&options.ignored_globs, &key, options.ignore_case)
    };

    let missing_meta = result
        .missing_meta
        .iter()
        .filter(|&asset| !ignored(asset) && !ignored(&asset.with_suffix(META_SUFFIX)))
        .cloned()
        .collect();

    let dangling_meta = if options.ignore_dangling {
        Default::default()
    } else {
        result
            .dangling_meta
            .iter()
            .filter(|&companion| !ignored(companion))
            .cloned()
            .collect()
    };

    let filtered = CheckResult {
        missing_meta,
        dangling_meta,
    };
    tracing::debug!(
        before = result.len(),
        after = filtered.len(),
        ignore_dangling = options.ignore_dangling,
        "Filtered check result"
    );
    filtered
}

/// Prefix that turns a root-relative path into a `cwd`-relative one.
fn match_base(root_dir: &Path, cwd: &Path) -> NormalizedPath {
    let absolute = if root_dir.is_absolute() {
        root_dir.to_path_buf()
    } else {
        cwd.join(root_dir)
    };
    match absolute.strip_prefix(cwd) {
        Ok(relative) => NormalizedPath::new(relative),
        Err(_) => NormalizedPath::new(""),
    }
}
