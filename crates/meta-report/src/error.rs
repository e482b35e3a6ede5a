//! Error types for meta-report

use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing reports
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No built-in template for the language
    #[error("Unknown language: {lang:?} (available: en, ja)")]
    UnknownLanguage { lang: String },

    /// Template file is not valid template JSON
    #[error("Failed to parse template {path}: {message}")]
    TemplateParse { path: PathBuf, message: String },

    /// Template field is empty
    #[error("Template field {field:?} must not be empty")]
    EmptyTemplateField { field: &'static str },

    /// Filesystem error from meta-fs
    #[error(transparent)]
    Fs(#[from] meta_fs::Error),
}
