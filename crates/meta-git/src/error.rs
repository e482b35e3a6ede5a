//! Error types for meta-git

use std::path::PathBuf;

/// Result type for meta-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in meta-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not a git repository (or any parent directory): {path}: {source}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Repository containing {path} has no working directory")]
    BareRepository { path: PathBuf },

    #[error("{path} is outside the working directory {workdir}")]
    OutsideWorkdir { path: PathBuf, workdir: PathBuf },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] meta_fs::Error),
}
