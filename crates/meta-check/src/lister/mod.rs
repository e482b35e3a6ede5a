//! Path enumeration strategies
//!
//! Each lister yields the authoritative set of paths below a root: relative,
//! slash-normalized, original case. Hidden names are never yielded.

mod tracked;
mod walk;

use std::collections::BTreeSet;
use std::path::Path;

use meta_fs::NormalizedPath;

use crate::Result;

pub use tracked::TrackedLister;
pub use walk::WalkLister;

/// Trait for enumerating the paths the checker classifies.
pub trait PathLister {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// List every file and directory path below `root`.
    ///
    /// Failures are permanent conditions and are never retried.
    fn list(&self, root: &Path) -> Result<BTreeSet<NormalizedPath>>;
}
