//! Ignore-file reader
//!
//! Turns a line-oriented pattern file into a list of [`Glob`]s.

use std::io::ErrorKind;
use std::path::Path;

use meta_fs::io;

use crate::{Error, Glob, Result};

/// Default ignore file name, looked up in the root directory.
pub const IGNORE_FILE_NAME: &str = ".meta-check-ignore";

/// Parse ignore patterns: one glob per line, `#` comments and blank lines
/// skipped, surrounding whitespace trimmed.
pub fn parse_ignore_patterns(content: &str) -> Result<Vec<Glob>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Glob::new)
        .collect()
}

/// Read and parse an ignore file.
pub fn read_ignore_file(path: &Path) -> Result<Vec<Glob>> {
    let content = io::read_text(path).map_err(|e| match e {
        meta_fs::Error::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
            Error::IgnoreFileNotFound {
                path: path.to_path_buf(),
            }
        }
        other => Error::Fs(other),
    })?;
    let globs = parse_ignore_patterns(&content)?;
    tracing::debug!(path = %path.display(), count = globs.len(), "Loaded ignore patterns");
    Ok(globs)
}

/// Load ignored globs for a run.
///
/// An explicit path must exist. Without one, `<root>/.meta-check-ignore` is
/// read when present and an empty list is used otherwise.
pub fn load_ignored_globs(explicit: Option<&Path>, root_abs: &Path) -> Result<Vec<Glob>> {
    if let Some(path) = explicit {
        return read_ignore_file(path);
    }

    match read_ignore_file(&root_abs.join(IGNORE_FILE_NAME)) {
        Err(Error::IgnoreFileNotFound { .. }) => {
            tracing::info!("No {IGNORE_FILE_NAME}, so ignored paths are empty");
            Ok(Vec::new())
        }
        other => other,
    }
}
