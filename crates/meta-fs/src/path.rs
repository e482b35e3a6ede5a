//! Normalized path handling for cross-platform compatibility

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A root-relative path normalized to use forward slashes internally.
///
/// Equality and ordering are case-sensitive and byte-wise. Case folding is
/// opt-in through [`NormalizedPath::fold_key`], so the reported spelling of a
/// path is never altered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes, drops leading `./`
    /// segments and trailing separators.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self::from_slashed(path_str.replace('\\', "/"))
    }

    fn from_slashed(mut normalized: String) -> Self {
        while let Some(rest) = normalized.strip_prefix("./") {
            normalized = rest.to_string();
        }
        while normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }
        if normalized == "." {
            normalized.clear();
        }
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this is the empty path (the root itself).
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Resolve this relative path against `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        if self.inner.is_empty() {
            return root.to_path_buf();
        }
        self.inner
            .split('/')
            .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self::from_slashed(segment_normalized);
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self::from_slashed(joined)
    }

    /// Iterate over the strict ancestors of this path, nearest first.
    ///
    /// `a/b/c` yields `a/b` then `a`.
    pub fn ancestors(&self) -> impl Iterator<Item = NormalizedPath> + '_ {
        self.inner
            .char_indices()
            .filter(|&(idx, c)| c == '/' && idx > 0)
            .map(|(idx, _)| Self {
                inner: self.inner[..idx].to_string(),
            })
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
    }

    /// Iterate over the `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// Whether the path ends with `suffix` (e.g. `.meta`).
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.inner.ends_with(suffix)
    }

    /// Append `suffix` to the path text, never replacing an extension.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            inner: format!("{}{}", self.inner, suffix),
        }
    }

    /// Remove a trailing `suffix`, if present.
    pub fn strip_suffix(&self, suffix: &str) -> Option<Self> {
        self.inner.strip_suffix(suffix).map(|stripped| Self {
            inner: stripped.to_string(),
        })
    }

    /// Whether `self` equals `other` or lies beneath it.
    pub fn starts_with(&self, other: &NormalizedPath) -> bool {
        if other.inner.is_empty() {
            return true;
        }
        match self.inner.strip_prefix(&other.inner) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Express `self` relative to `base`, if it lies beneath it.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<Self> {
        if base.inner.is_empty() {
            return Some(self.clone());
        }
        let rest = self.inner.strip_prefix(&base.inner)?;
        if rest.is_empty() {
            Some(Self {
                inner: String::new(),
            })
        } else {
            rest.strip_prefix('/').map(|r| Self {
                inner: r.to_string(),
            })
        }
    }

    /// Comparison key, lowercased when `ignore_case` is set.
    pub fn fold_key(&self, ignore_case: bool) -> Cow<'_, str> {
        if ignore_case {
            Cow::Owned(self.inner.to_lowercase())
        } else {
            Cow::Borrowed(&self.inner)
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_prefix_and_trailing_slash_are_dropped() {
        assert_eq!(NormalizedPath::new("./Assets/Foo/").as_str(), "Assets/Foo");
        assert!(NormalizedPath::new(".").is_empty());
    }

    #[test]
    fn test_join_on_empty_root() {
        let root = NormalizedPath::new("");
        assert_eq!(root.join("Assets").as_str(), "Assets");
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let path = NormalizedPath::new("a/b/c.txt");
        let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
        assert_eq!(ancestors, vec!["a/b", "a"]);
    }
}
