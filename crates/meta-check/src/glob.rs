//! Glob patterns matched against root-relative paths

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use globset::{GlobBuilder, GlobMatcher};
use meta_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A validated shell-style glob.
///
/// `*` stays within one path segment, `**` crosses segments. A path matches
/// when the pattern matches the path itself or any of its ancestors, so a
/// directory pattern covers its whole subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Glob {
    raw: String,
    exact: GlobMatcher,
    folded: GlobMatcher,
}

impl Glob {
    /// Compile `pattern`; a leading `./` and trailing `/` are ignored.
    pub fn new(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();
        let raw = trimmed
            .strip_prefix("./")
            .unwrap_or(trimmed)
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            exact: compile(&raw, false)?,
            folded: compile(&raw, true)?,
            raw,
        })
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `path` or one of its ancestors matches.
    pub fn is_match(&self, path: &NormalizedPath, ignore_case: bool) -> bool {
        let matcher = if ignore_case { &self.folded } else { &self.exact };
        matcher.is_match(path.as_str())
            || path
                .ancestors()
                .any(|ancestor| matcher.is_match(ancestor.as_str()))
    }
}

fn compile(pattern: &str, case_insensitive: bool) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .case_insensitive(case_insensitive)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })
}

/// Whether any of `globs` matches `path`.
pub fn matches_any(globs: &[Glob], path: &NormalizedPath, ignore_case: bool) -> bool {
    globs.iter().any(|glob| glob.is_match(path, ignore_case))
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Glob {}

impl Hash for Glob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for Glob {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Glob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl std::fmt::Display for Glob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Glob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Glob {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<Glob> for String {
    fn from(glob: Glob) -> Self {
        glob.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn path(s: &str) -> NormalizedPath {
        NormalizedPath::new(s)
    }

    #[rstest]
    #[case("Generated/**", "Generated/Foo.cs", true)]
    #[case("Generated/**", "Generated/Deep/Nested/Foo.cs", true)]
    #[case("Generated", "Generated/Deep/Foo.cs", true)]
    #[case("Generated/**", "Assets/Generated/Foo.cs", false)]
    #[case("*.cs", "Foo.cs", true)]
    #[case("*.cs", "Assets/Foo.cs", false)]
    #[case("**/*.cs", "Assets/Foo.cs", true)]
    #[case("Assets/{A,B}.png", "Assets/B.png", true)]
    #[case("./Assets/Foo.cs", "Assets/Foo.cs", true)]
    #[case("Generated/", "Generated", true)]
    #[case("Generated/", "Generated/Proto.cs", true)]
    #[case("Generated/**/", "Generated/Deep/Proto.cs", true)]
    fn test_is_match(#[case] pattern: &str, #[case] candidate: &str, #[case] expected: bool) {
        let glob = Glob::new(pattern).unwrap();
        assert_eq!(glob.is_match(&path(candidate), false), expected);
    }

    #[test]
    fn test_case_folding_follows_flag() {
        let glob = Glob::new("generated/**").unwrap();
        assert!(!glob.is_match(&path("Generated/Foo.cs"), false));
        assert!(glob.is_match(&path("Generated/Foo.cs"), true));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Glob::new("Assets/[").unwrap_err();
        assert!(matches!(err, Error::InvalidGlob { .. }));
    }

    #[test]
    fn test_equality_by_pattern_text() {
        assert_eq!(Glob::new("./a/**").unwrap(), Glob::new("a/**").unwrap());
        assert_eq!(Glob::new("a/**").unwrap().to_string(), "a/**");
    }
}
