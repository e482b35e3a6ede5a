//! Version-control backed lister for project roots

use std::collections::BTreeSet;
use std::path::Path;

use meta_fs::{NormalizedPath, ProjectPath, find_local_packages, is_hidden_name};
use meta_git::{EntryKind, TrackedFiles};

use crate::lister::PathLister;
use crate::{Error, Result};

/// Lists the tracked contents of `Assets/` and of every local package under
/// `Packages/`.
///
/// Version control records files only, so every directory between a scope
/// root and a tracked file is synthesized. Scope roots themselves are never
/// yielded; they need no companion.
#[derive(Debug, Clone, Default)]
pub struct TrackedLister {
    ignore_submodules_and_nested: bool,
}

impl TrackedLister {
    pub fn new(ignore_submodules_and_nested: bool) -> Self {
        Self {
            ignore_submodules_and_nested,
        }
    }

    fn scopes(&self, root: &Path) -> Result<Vec<NormalizedPath>> {
        let assets = NormalizedPath::new(ProjectPath::Assets.as_str());
        if !assets.resolve(root).is_dir() {
            return Err(Error::config(format!(
                "{} is not a Unity project root: {} is missing",
                root.display(),
                ProjectPath::Assets
            )));
        }
        let mut scopes = vec![assets];
        scopes.extend(find_local_packages(root)?);
        Ok(scopes)
    }
}

impl PathLister for TrackedLister {
    fn name(&self) -> &'static str {
        "tracked"
    }

    fn list(&self, root: &Path) -> Result<BTreeSet<NormalizedPath>> {
        let files = TrackedFiles::new().recurse_submodules(!self.ignore_submodules_and_nested);
        let mut paths = BTreeSet::new();

        for scope in self.scopes(root)? {
            let entries = files
                .list(&scope.resolve(root))
                .map_err(|source| Error::Tracked {
                    root: root.to_path_buf(),
                    source,
                })?;

            for entry in entries {
                if entry.path.segments().any(is_hidden_name) {
                    tracing::debug!(path = %entry.path, scope = %scope, "Skipping hidden path");
                    continue;
                }
                if entry.kind == EntryKind::Submodule {
                    tracing::debug!(path = %entry.path, scope = %scope, "Tracked submodule");
                }
                for ancestor in entry.path.ancestors() {
                    paths.insert(scope.join(ancestor.as_str()));
                }
                paths.insert(scope.join(entry.path.as_str()));
            }
        }

        tracing::debug!(count = paths.len(), "Tracked paths listed");
        Ok(paths)
    }
}
