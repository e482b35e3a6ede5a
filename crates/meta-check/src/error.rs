//! Error types for meta-check

use std::path::PathBuf;

use crate::autofix::FixReport;

/// Result type for meta-check operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in meta-check operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid option value or inconsistent configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Unknown target type name
    #[error(
        "Unknown target type: {value:?} (expected auto-detect, unity-project, unity-project-sub-dir or upm-package)"
    )]
    InvalidTargetType { value: String },

    /// Root path exists but is not a directory
    #[error("Root is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    /// Auto-detection could not classify the root
    #[error(
        "Cannot detect target type of {root}: expected Assets/ and ProjectSettings/ (Unity project) or package.json (package)"
    )]
    AmbiguousTarget { root: PathBuf },

    /// Pattern could not be compiled
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Explicitly configured ignore file does not exist
    #[error("Ignore file not found: {path}")]
    IgnoreFileNotFound { path: PathBuf },

    /// Version control could not enumerate tracked files
    #[error("Failed to list tracked files under {root}: {source}")]
    Tracked {
        root: PathBuf,
        #[source]
        source: meta_git::Error,
    },

    /// Directory walk failed
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Every attempted autofix operation failed
    #[error("All {attempted} autofix operations failed")]
    AllFixesFailed {
        attempted: usize,
        report: Box<FixReport>,
    },

    /// Filesystem error from meta-fs
    #[error(transparent)]
    Fs(#[from] meta_fs::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from path enumeration.
    pub fn is_enumeration(&self) -> bool {
        matches!(self, Self::Tracked { .. } | Self::Walk { .. })
    }
}
