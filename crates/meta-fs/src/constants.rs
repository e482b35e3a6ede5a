//! Constants and enums for Unity project filesystem paths.

use std::path::Path;

/// Suffix appended to an asset path to name its companion file.
pub const META_SUFFIX: &str = ".meta";

/// Directories Unity regenerates next to `Assets/`; never part of the asset tree.
pub const GENERATED_DIRS: &[&str] = &["Library", "Temp", "Logs", "obj", "UserSettings"];

/// Dependency directories skipped anywhere in a walk.
pub const VENDORED_DIRS: &[&str] = &["node_modules"];

/// Standard Unity project markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `Assets` directory (asset tree of a project)
    Assets,
    /// The `ProjectSettings` directory (project-wide settings)
    ProjectSettings,
    /// The `Packages` directory (embedded and local packages)
    Packages,
    /// The `package.json` manifest of a package
    PackageManifest,
    /// The `.git` directory or file (repository or submodule)
    GitDir,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::ProjectSettings => "ProjectSettings",
            Self::Packages => "Packages",
            Self::PackageManifest => "package.json",
            Self::GitDir => ".git",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether Unity skips a file or directory with this name during import.
///
/// Hidden names start with `.`, end with `~`, are `cvs` in any case,
/// or carry the `.tmp` extension.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
        || name.ends_with('~')
        || name.eq_ignore_ascii_case("cvs")
        || name.ends_with(".tmp")
}
