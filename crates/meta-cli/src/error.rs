//! Error types for meta-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from meta-check
    #[error(transparent)]
    Core(#[from] meta_check::Error),

    /// Error from meta-report
    #[error(transparent)]
    Report(#[from] meta_report::Error),

    /// Error from meta-fs
    #[error(transparent)]
    Fs(#[from] meta_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Follow-up advice printed under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Core(e) if e.is_enumeration() => Some(
                "project roots are listed from the git index; \
                 pass --target-type unity-project-sub-dir to walk the directory instead",
            ),
            _ => None,
        }
    }
}
