//! Lister selection from the declared or detected target type

use std::path::Path;
use std::str::FromStr;

use meta_fs::{ProjectLayout, TargetType};
use serde::{Deserialize, Serialize};

use crate::lister::{PathLister, TrackedLister, WalkLister};
use crate::{Error, Result};

/// Target type as configured by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeclaredTargetType {
    /// Inspect the root's markers
    #[default]
    Auto,
    ProjectRoot,
    ProjectSubdirectory,
}

impl DeclaredTargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto-detect",
            Self::ProjectRoot => "unity-project",
            Self::ProjectSubdirectory => "unity-project-sub-dir",
        }
    }
}

impl FromStr for DeclaredTargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "auto" | "auto-detect" => Ok(Self::Auto),
            "unity-project" => Ok(Self::ProjectRoot),
            "unity-project-sub-dir" | "upm-package" => Ok(Self::ProjectSubdirectory),
            other => Err(Error::InvalidTargetType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DeclaredTargetType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DeclaredTargetType> for String {
    fn from(declared: DeclaredTargetType) -> Self {
        declared.as_str().to_string()
    }
}

impl std::fmt::Display for DeclaredTargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Picks the [`PathLister`] for a root.
///
/// Project roots are enumerated through version control; subdirectories and
/// packages through the convention-aware walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategySelector {
    ignore_submodules_and_nested: bool,
}

impl StrategySelector {
    pub fn new(ignore_submodules_and_nested: bool) -> Self {
        Self {
            ignore_submodules_and_nested,
        }
    }

    /// Resolve the target type of `root_abs` and build its lister.
    pub fn select(
        &self,
        root_abs: &Path,
        declared: DeclaredTargetType,
    ) -> Result<(Box<dyn PathLister>, TargetType)> {
        let target_type = match declared {
            DeclaredTargetType::ProjectRoot => TargetType::ProjectRoot,
            DeclaredTargetType::ProjectSubdirectory => TargetType::ProjectSubdirectory,
            DeclaredTargetType::Auto => ProjectLayout::detect(root_abs)
                .map_err(|e| match e {
                    meta_fs::Error::AmbiguousTarget { root } => Error::AmbiguousTarget { root },
                    other => Error::Fs(other),
                })?
                .target_type,
        };

        let lister: Box<dyn PathLister> = match target_type {
            TargetType::ProjectRoot => Box::new(TrackedLister::new(self.ignore_submodules_and_nested)),
            TargetType::ProjectSubdirectory => {
                Box::new(WalkLister::new(self.ignore_submodules_and_nested))
            }
        };

        tracing::info!(
            root = %root_abs.display(),
            %declared,
            %target_type,
            lister = lister.name(),
            "Selected path lister"
        );
        Ok((lister, target_type))
    }
}
