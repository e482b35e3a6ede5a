//! Report renderers for meta-check
//!
//! Each renderer takes a [`CheckResult`](meta_check::CheckResult) or a
//! [`FixReport`](meta_check::FixReport) and returns the finished document as
//! a string; writing it anywhere is up to the caller.
//!
//! - [`text`]: one line per entry, for terminals and pipes
//! - [`junit`]: JUnit XML for CI test result panels
//! - [`markdown`]: localized comment body built from a [`Template`]

pub mod error;
pub mod junit;
pub mod l10n;
pub mod markdown;
pub mod text;

pub use error::{Error, Result};
pub use junit::render_junit;
pub use l10n::{Lang, Template};
pub use markdown::render_markdown;
pub use text::{render_check, render_fix};
