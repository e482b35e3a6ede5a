//! Tracked-file enumeration through the repository index

use std::collections::HashMap;
use std::path::Path;

use git2::{Repository, Submodule};
use meta_fs::NormalizedPath;

use crate::{Error, Result};

/// File mode git records for a submodule (gitlink) entry.
const GITLINK_MODE: u32 = 0o160000;

/// Kind of an index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    /// A tracked blob
    File,
    /// A tracked submodule; the path names its directory
    Submodule,
}

/// A tracked path, relative to the directory that was listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackedEntry {
    pub path: NormalizedPath,
    pub kind: EntryKind,
}

/// Lists the files a repository tracks below a directory.
///
/// Reads the index rather than walking the working tree, so ignored and
/// untracked files never appear while staged-but-deleted files do.
#[derive(Debug, Clone, Default)]
pub struct TrackedFiles {
    recurse_submodules: bool,
}

impl TrackedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into checked-out submodules instead of reporting only
    /// their directory.
    pub fn recurse_submodules(mut self, recurse: bool) -> Self {
        self.recurse_submodules = recurse;
        self
    }

    /// List tracked entries below `dir`, sorted and deduplicated.
    ///
    /// Fails when `dir` is not inside a git working tree.
    pub fn list(&self, dir: &Path) -> Result<Vec<TrackedEntry>> {
        let dir = dunce::canonicalize(dir).map_err(|e| meta_fs::Error::io(dir, e))?;
        let repo = Repository::discover(&dir).map_err(|source| Error::NotARepository {
            path: dir.clone(),
            source,
        })?;
        let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
            path: dir.clone(),
        })?;
        let workdir = dunce::canonicalize(workdir).map_err(|e| meta_fs::Error::io(workdir, e))?;

        let scope = dir
            .strip_prefix(&workdir)
            .map(NormalizedPath::new)
            .map_err(|_| Error::OutsideWorkdir {
                path: dir.clone(),
                workdir: workdir.clone(),
            })?;

        tracing::debug!(
            workdir = %workdir.display(),
            scope = %scope,
            recurse_submodules = self.recurse_submodules,
            "Listing tracked files"
        );

        let mut entries = Vec::new();
        self.collect(&repo, &NormalizedPath::new(""), &scope, &mut entries)?;
        entries.sort();
        entries.dedup();
        Ok(entries)
    }

    /// Collect entries of `repo`, whose working tree is mounted at `mount`
    /// relative to the top-level working tree, that fall under `scope`.
    fn collect(
        &self,
        repo: &Repository,
        mount: &NormalizedPath,
        scope: &NormalizedPath,
        out: &mut Vec<TrackedEntry>,
    ) -> Result<()> {
        let index = repo.index()?;
        let submodules: HashMap<NormalizedPath, Submodule<'_>> = if self.recurse_submodules {
            repo.submodules()?
                .into_iter()
                .map(|sm| (NormalizedPath::new(sm.path()), sm))
                .collect()
        } else {
            HashMap::new()
        };

        for entry in index.iter() {
            let relative = String::from_utf8_lossy(&entry.path);
            let full = mount.join(&relative);

            if entry.mode == GITLINK_MODE {
                if let Some(path) = full.strip_prefix(scope).filter(|p| !p.is_empty()) {
                    out.push(TrackedEntry {
                        path,
                        kind: EntryKind::Submodule,
                    });
                }

                let overlaps = full.starts_with(scope) || scope.starts_with(&full);
                if !self.recurse_submodules || !overlaps {
                    continue;
                }

                let key = NormalizedPath::new(&*relative);
                match submodules.get(&key).map(Submodule::open) {
                    Some(Ok(sub_repo)) => self.collect(&sub_repo, &full, scope, out)?,
                    Some(Err(e)) => {
                        tracing::warn!(submodule = %full, error = %e, "Submodule is not checked out; skipping its contents");
                    }
                    None => {
                        tracing::warn!(submodule = %full, "Gitlink without .gitmodules entry; skipping its contents");
                    }
                }
            } else if let Some(path) = full.strip_prefix(scope).filter(|p| !p.is_empty()) {
                out.push(TrackedEntry {
                    path,
                    kind: EntryKind::File,
                });
            }
        }

        Ok(())
    }
}
