//! Unity project layout detection
//!
//! Classifies a root directory as a full project or as a subdirectory
//! (including packages), and discovers local packages of a project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, ProjectPath, Result};

/// Kind of root handed to the checker.
///
/// Determines how paths below the root are resolved, not the check algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// A Unity project root containing `Assets/` and `ProjectSettings/`
    ProjectRoot,
    /// A directory inside a project, or a package
    ProjectSubdirectory,
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectRoot => write!(f, "ProjectRoot"),
            Self::ProjectSubdirectory => write!(f, "ProjectSubdirectory"),
        }
    }
}

/// A detected project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub target_type: TargetType,
}

impl ProjectLayout {
    /// Detect the target type of `root` from its markers.
    ///
    /// The `Assets/` + `ProjectSettings/` pair wins over `package.json`.
    pub fn detect(root: &Path) -> Result<Self> {
        let target_type = if is_project_root(root) {
            TargetType::ProjectRoot
        } else if is_package_root(root) {
            TargetType::ProjectSubdirectory
        } else {
            return Err(Error::AmbiguousTarget {
                root: root.to_path_buf(),
            });
        };

        tracing::debug!(root = %root.display(), %target_type, "Detected target type");
        Ok(Self {
            root: root.to_path_buf(),
            target_type,
        })
    }
}

/// Whether `dir` holds both `Assets/` and `ProjectSettings/`.
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(ProjectPath::Assets).is_dir() && dir.join(ProjectPath::ProjectSettings).is_dir()
}

/// Whether `dir` holds a `package.json` manifest.
pub fn is_package_root(dir: &Path) -> bool {
    dir.join(ProjectPath::PackageManifest).is_file()
}

/// Resolve `path` to an absolute, symlink-free directory path.
///
/// Fails when the path does not exist or is not a directory.
pub fn validate_root_dir(path: &Path) -> Result<PathBuf> {
    let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
    if !canonical.is_dir() {
        return Err(Error::NotADirectory { path: canonical });
    }
    Ok(canonical)
}

/// List local packages of a project: direct children of `Packages/` that
/// carry a `package.json`, relative to `project_root`, sorted.
///
/// Symlinked package directories point outside the project and are skipped.
pub fn find_local_packages(project_root: &Path) -> Result<Vec<NormalizedPath>> {
    let packages_dir = project_root.join(ProjectPath::Packages);
    if !packages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&packages_dir).map_err(|e| Error::io(&packages_dir, e))?;
    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&packages_dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_symlink() {
            tracing::debug!(path = %entry.path().display(), "Skipping symlinked package");
            continue;
        }
        if file_type.is_dir() && is_package_root(&entry.path()) {
            let name = entry.file_name().to_string_lossy().into_owned();
            packages.push(NormalizedPath::new(ProjectPath::Packages.as_str()).join(&name));
        }
    }
    packages.sort();
    Ok(packages)
}
