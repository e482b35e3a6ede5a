//! Companion `.meta` consistency engine
//!
//! This crate checks that every asset under a target directory has exactly
//! one companion `.meta` file, and optionally repairs the tree:
//!
//! - **Listers**: interchangeable path enumeration backends behind [`PathLister`]
//! - **Selection**: [`StrategySelector`] picks a lister from the target type
//! - **Checker**: partitions paths and computes missing/dangling sets
//! - **Filter**: ignore globs, case folding, dangling suppression
//! - **AutoFixer**: creates or removes companions under an allow-list
//!
//! # Architecture
//!
//! ```text
//!      root + CheckOptions
//!              |
//!      StrategySelector --> PathLister (tracked | walk)
//!              |
//!           Checker --> CheckResult --> filter() --> AutoFixer --> FixReport
//! ```
//!
//! # Example
//!
//! ```no_run
//! use meta_check::{CheckOptions, Checker, FilterOptions, filter};
//! use std::path::Path;
//!
//! fn example(root: &Path) -> meta_check::Result<()> {
//!     let result = Checker::new().check(root, &CheckOptions::default())?;
//!     let filtered = filter(&result, &FilterOptions::default(), root);
//!     for path in &filtered.missing_meta {
//!         println!("missing {path}.meta");
//!     }
//!     Ok(())
//! }
//! ```

pub mod autofix;
pub mod checker;
pub mod error;
pub mod filter;
pub mod glob;
pub mod ignore_file;
pub mod lister;
pub mod select;

pub use autofix::{
    AutoFixer, FixOptions, FixReport, Guid, GuidGenerator, MetaKind, RandomGuidGenerator,
    SequentialGuidGenerator, render_meta,
};
pub use checker::{CheckOptions, CheckResult, Checker, classify};
pub use error::{Error, Result};
pub use filter::{FilterOptions, filter};
pub use glob::{Glob, matches_any};
pub use ignore_file::{IGNORE_FILE_NAME, load_ignored_globs, parse_ignore_patterns, read_ignore_file};
pub use lister::{PathLister, TrackedLister, WalkLister};
pub use meta_fs::{NormalizedPath, TargetType};
pub use select::{DeclaredTargetType, StrategySelector};
