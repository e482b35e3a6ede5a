//! Git abstraction for meta-check
//!
//! Enumerates the files a repository tracks, optionally descending into
//! submodules, relative to an arbitrary directory inside the working tree.

pub mod error;
pub mod tracked;

pub use error::{Error, Result};
pub use tracked::{EntryKind, TrackedEntry, TrackedFiles};
