//! Filesystem abstraction for meta-check
//!
//! Provides slash-normalized relative paths, Unity project layout detection
//! and the small set of I/O primitives the checker and autofixer need.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use constants::{META_SUFFIX, ProjectPath, is_hidden_name};
pub use error::{Error, Result};
pub use layout::{ProjectLayout, TargetType, find_local_packages, validate_root_dir};
pub use path::NormalizedPath;
