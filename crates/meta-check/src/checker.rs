//! Missing and dangling companion detection

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use meta_fs::{META_SUFFIX, NormalizedPath, validate_root_dir};
use serde::Serialize;

use crate::lister::PathLister;
use crate::select::{DeclaredTargetType, StrategySelector};
use crate::{Error, Result};

/// Options for a single check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Compare asset and companion paths case-insensitively
    pub ignore_case: bool,
    /// Do not enumerate submodules and nested projects or packages
    pub ignore_submodules_and_nested: bool,
    /// Declared target type; `Auto` inspects the root
    pub target_type: DeclaredTargetType,
}

/// Outcome of a check.
///
/// `missing_meta` holds asset paths without a companion, `dangling_meta`
/// holds companion paths without an asset. The sets never intersect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub missing_meta: BTreeSet<NormalizedPath>,
    pub dangling_meta: BTreeSet<NormalizedPath>,
}

impl CheckResult {
    /// Whether no violation was found.
    pub fn is_empty(&self) -> bool {
        self.missing_meta.is_empty() && self.dangling_meta.is_empty()
    }

    /// Total number of violations.
    pub fn len(&self) -> usize {
        self.missing_meta.len() + self.dangling_meta.len()
    }

    /// Companion paths that `missing_meta` expects.
    pub fn expected_companions(&self) -> impl Iterator<Item = NormalizedPath> + '_ {
        self.missing_meta
            .iter()
            .map(|asset| asset.with_suffix(META_SUFFIX))
    }
}

/// Runs a [`PathLister`] and classifies its output.
#[derive(Default)]
pub struct Checker {
    lister: Option<Box<dyn PathLister>>,
}

impl Checker {
    /// Checker that selects its lister from the options on every run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker bound to a pre-resolved lister.
    pub fn with_lister(lister: Box<dyn PathLister>) -> Self {
        Self {
            lister: Some(lister),
        }
    }

    /// Check every asset below `root` for a companion and every companion
    /// for an asset.
    ///
    /// Lister errors propagate unchanged; no partial result is returned.
    pub fn check(&self, root: &Path, options: &CheckOptions) -> Result<CheckResult> {
        let root_abs = validate_root_dir(root).map_err(|e| match e {
            meta_fs::Error::NotADirectory { path } => Error::RootNotDirectory { path },
            other => Error::Fs(other),
        })?;

        let selected;
        let lister: &dyn PathLister = match &self.lister {
            Some(lister) => lister.as_ref(),
            None => {
                let (lister, _) = StrategySelector::new(options.ignore_submodules_and_nested)
                    .select(&root_abs, options.target_type)?;
                selected = lister;
                selected.as_ref()
            }
        };

        let paths = lister.list(&root_abs)?;
        tracing::debug!(lister = lister.name(), count = paths.len(), "Listed paths");

        let result = classify(&paths, options.ignore_case);
        tracing::info!(
            root = %root_abs.display(),
            missing = result.missing_meta.len(),
            dangling = result.dangling_meta.len(),
            "Check complete"
        );
        Ok(result)
    }
}

/// Partition `paths` into assets and companions and pair them up.
///
/// With `ignore_case` the pairing compares lowercased keys; reported paths
/// keep their original spelling.
pub fn classify(paths: &BTreeSet<NormalizedPath>, ignore_case: bool) -> CheckResult {
    let (companions, assets): (Vec<&NormalizedPath>, Vec<&NormalizedPath>) =
        paths.iter().partition(|path| path.has_suffix(META_SUFFIX));

    let asset_keys: HashSet<Cow<'_, str>> =
        assets.iter().map(|asset| asset.fold_key(ignore_case)).collect();
    let companion_keys: HashSet<Cow<'_, str>> = companions
        .iter()
        .map(|companion| companion.fold_key(ignore_case))
        .collect();

    let mut result = CheckResult::default();

    for asset in assets {
        let expected = asset.with_suffix(META_SUFFIX);
        if !companion_keys.contains(&*expected.fold_key(ignore_case)) {
            tracing::debug!(path = %asset, "Missing companion");
            result.missing_meta.insert(asset.clone());
        }
    }

    for companion in companions {
        let implied = companion
            .strip_suffix(META_SUFFIX)
            .filter(|asset| !asset.is_empty() && !asset.as_str().ends_with('/'));
        let paired = implied
            .as_ref()
            .is_some_and(|asset| asset_keys.contains(&*asset.fold_key(ignore_case)));
        if !paired {
            tracing::debug!(path = %companion, "Dangling companion");
            result.dangling_meta.insert(companion.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(items: &[&str]) -> BTreeSet<NormalizedPath> {
        items.iter().map(|p| NormalizedPath::new(p)).collect()
    }

    #[test]
    fn test_missing_companion() {
        let result = classify(&paths(&["A.cs", "A.cs.meta", "B.cs"]), false);
        assert_eq!(result.missing_meta, paths(&["B.cs"]));
        assert!(result.dangling_meta.is_empty());
    }

    #[test]
    fn test_dangling_companion() {
        let result = classify(&paths(&["A.cs", "A.cs.meta", "Stale.cs.meta"]), false);
        assert!(result.missing_meta.is_empty());
        assert_eq!(result.dangling_meta, paths(&["Stale.cs.meta"]));
    }

    #[test]
    fn test_directory_companion_is_not_dangling() {
        let result = classify(&paths(&["Dir", "Dir.meta", "Dir/A.cs", "Dir/A.cs.meta"]), false);
        assert!(result.is_empty());
    }

    #[test]
    fn test_suffix_is_appended_not_replaced() {
        let result = classify(&paths(&["Foo.png", "Foo.meta"]), false);
        assert_eq!(result.missing_meta, paths(&["Foo.png"]));
        assert_eq!(result.dangling_meta, paths(&["Foo.meta"]));
    }

    #[test]
    fn test_companion_of_companion_is_dangling() {
        let result = classify(&paths(&["A.cs", "A.cs.meta", "A.cs.meta.meta"]), false);
        assert!(result.missing_meta.is_empty());
        assert_eq!(result.dangling_meta, paths(&["A.cs.meta.meta"]));
    }

    #[test]
    fn test_case_folding() {
        let input = paths(&["Foo.cs", "foo.cs.meta"]);

        let folded = classify(&input, true);
        assert!(folded.is_empty());

        let exact = classify(&input, false);
        assert_eq!(exact.missing_meta, paths(&["Foo.cs"]));
        assert_eq!(exact.dangling_meta, paths(&["foo.cs.meta"]));
    }

    #[test]
    fn test_bare_suffix_is_dangling() {
        let result = classify(&paths(&[".meta"]), false);
        assert_eq!(result.dangling_meta, paths(&[".meta"]));
    }

    #[test]
    fn test_serializes_as_path_lists() {
        let result = classify(&paths(&["A.cs", "Old.cs.meta"]), false);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"missing_meta": ["A.cs"], "dangling_meta": ["Old.cs.meta"]})
        );
    }

    #[test]
    fn test_expected_companions() {
        let result = classify(&paths(&["Dir", "Dir/A.cs"]), false);
        let expected: Vec<String> = result.expected_companions().map(String::from).collect();
        assert_eq!(expected, vec!["Dir.meta", "Dir/A.cs.meta"]);
    }
}
