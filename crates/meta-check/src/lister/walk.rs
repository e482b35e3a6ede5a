//! Convention-aware directory walk for subdirectories and packages

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use meta_fs::constants::{GENERATED_DIRS, VENDORED_DIRS};
use meta_fs::layout::{is_package_root, is_project_root};
use meta_fs::{NormalizedPath, ProjectPath, is_hidden_name};
use walkdir::WalkDir;

use crate::lister::PathLister;
use crate::{Error, Result};

/// Walks the directory tree below the root.
///
/// Skips hidden names, `node_modules`, and the regenerated directories that
/// sit beside `Assets/` in a nested project. Symlinks are followed; entries
/// that would loop back to an ancestor are skipped.
#[derive(Debug, Clone, Default)]
pub struct WalkLister {
    ignore_submodules_and_nested: bool,
}

impl WalkLister {
    pub fn new(ignore_submodules_and_nested: bool) -> Self {
        Self {
            ignore_submodules_and_nested,
        }
    }
}

/// Whether `dir` is the root of an independent repository, package or project.
fn is_nested_root(dir: &Path) -> bool {
    dir.join(ProjectPath::GitDir).exists() || is_package_root(dir) || is_project_root(dir)
}

fn is_excluded_dir(name: &str, parent: Option<&Path>) -> bool {
    VENDORED_DIRS.contains(&name)
        || (GENERATED_DIRS.contains(&name) && parent.is_some_and(is_project_root))
}

impl PathLister for WalkLister {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn list(&self, root: &Path) -> Result<BTreeSet<NormalizedPath>> {
        let mut paths = BTreeSet::new();
        let mut entries = WalkDir::new(root).follow_links(true).min_depth(1).into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.loop_ancestor().is_some() => {
                    tracing::warn!(path = ?err.path(), "Skipping symlink loop");
                    continue;
                }
                Err(err) if err.io_error().is_some_and(|e| e.kind() == ErrorKind::NotFound) => {
                    tracing::warn!(path = ?err.path(), "Skipping dangling symlink");
                    continue;
                }
                Err(source) => {
                    return Err(Error::Walk {
                        root: root.to_path_buf(),
                        source,
                    });
                }
            };

            let name = entry.file_name().to_string_lossy();
            let is_dir = entry.file_type().is_dir();
            if is_hidden_name(&name) || (is_dir && is_excluded_dir(&name, entry.path().parent())) {
                if is_dir {
                    entries.skip_current_dir();
                }
                continue;
            }

            // min_depth(1) guarantees every entry lies strictly below root
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            paths.insert(NormalizedPath::new(relative));

            if is_dir && self.ignore_submodules_and_nested && is_nested_root(entry.path()) {
                tracing::debug!(path = %entry.path().display(), "Not descending into nested root");
                entries.skip_current_dir();
            }
        }

        tracing::debug!(count = paths.len(), "Walked paths listed");
        Ok(paths)
    }
}
