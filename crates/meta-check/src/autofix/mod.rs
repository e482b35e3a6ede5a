//! Companion repair
//!
//! Creates missing companions and removes dangling ones, restricted to an
//! allow-list of globs. Work is best effort: one path failing never stops
//! the others, and nothing is rolled back.

mod guid;
mod meta;

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::PathBuf;

use meta_fs::{META_SUFFIX, NormalizedPath, io};
use serde::Serialize;

use crate::checker::CheckResult;
use crate::glob::{Glob, matches_any};
use crate::{Error, Result};

pub use guid::{Guid, GuidGenerator, RandomGuidGenerator, SequentialGuidGenerator};
pub use meta::{MetaKind, render_meta};

/// Reason recorded for paths outside the allow-list.
pub const NOT_ALLOWED: &str = "not allowed";

/// Options for [`AutoFixer::fix`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOptions {
    /// Report intended changes without touching the filesystem
    pub dry_run: bool,
    /// Root the result paths are relative to
    pub root_dir: PathBuf,
    /// Only paths matching one of these are touched. Unlike the ignore globs
    /// of [`crate::filter`], these match root-relative paths, independent of
    /// the working directory.
    pub allowed_globs: Vec<Glob>,
    /// Match the allow-list case-insensitively
    pub ignore_case: bool,
}

/// Outcome of a fix run, keyed by companion path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub created: BTreeSet<NormalizedPath>,
    pub removed: BTreeSet<NormalizedPath>,
    pub skipped: BTreeMap<NormalizedPath, String>,
    pub failures: BTreeMap<NormalizedPath, String>,
}

impl FixReport {
    /// Number of create and remove operations attempted.
    pub fn attempted(&self) -> usize {
        self.created.len() + self.removed.len() + self.failures.len()
    }

    /// Whether every attempted operation succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Applies a [`CheckResult`] to the filesystem.
pub struct AutoFixer {
    generator: Box<dyn GuidGenerator>,
}

impl Default for AutoFixer {
    fn default() -> Self {
        Self::new(Box::new(RandomGuidGenerator))
    }
}

impl AutoFixer {
    pub fn new(generator: Box<dyn GuidGenerator>) -> Self {
        Self { generator }
    }

    /// Create every allowed missing companion and delete every allowed
    /// dangling one, in path order.
    ///
    /// Fails only when `root_dir` is not a directory or when operations were
    /// attempted and all of them failed; other per-path errors land in
    /// [`FixReport::failures`].
    pub fn fix(&self, result: &CheckResult, options: &FixOptions) -> Result<FixReport> {
        if !options.root_dir.is_dir() {
            return Err(Error::RootNotDirectory {
                path: options.root_dir.clone(),
            });
        }

        let allowed = |path: &NormalizedPath| {
            matches_any(&options.allowed_globs, path, options.ignore_case)
        };
        let mut report = FixReport::default();

        for asset in &result.missing_meta {
            let companion = asset.with_suffix(META_SUFFIX);
            if !allowed(asset) && !allowed(&companion) {
                tracing::debug!(path = %companion, "Skipping creation outside allow-list");
                report.skipped.insert(companion, NOT_ALLOWED.to_string());
                continue;
            }
            match self.create(asset, &companion, options) {
                Ok(()) => {
                    report.created.insert(companion);
                }
                Err(message) => {
                    tracing::warn!(path = %companion, error = %message, "Failed to create companion");
                    report.failures.insert(companion, message);
                }
            }
        }

        for companion in &result.dangling_meta {
            if !allowed(companion) {
                tracing::debug!(path = %companion, "Skipping removal outside allow-list");
                report
                    .skipped
                    .insert(companion.clone(), NOT_ALLOWED.to_string());
                continue;
            }
            match self.remove(companion, options) {
                Ok(()) => {
                    report.removed.insert(companion.clone());
                }
                Err(message) => {
                    tracing::warn!(path = %companion, error = %message, "Failed to remove companion");
                    report.failures.insert(companion.clone(), message);
                }
            }
        }

        tracing::info!(
            dry_run = options.dry_run,
            created = report.created.len(),
            removed = report.removed.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Autofix complete"
        );

        let attempted = report.attempted();
        if attempted > 0 && report.failures.len() == attempted {
            return Err(Error::AllFixesFailed {
                attempted,
                report: Box::new(report),
            });
        }
        Ok(report)
    }

    fn create(
        &self,
        asset: &NormalizedPath,
        companion: &NormalizedPath,
        options: &FixOptions,
    ) -> std::result::Result<(), String> {
        let asset_path = asset.resolve(&options.root_dir);
        let kind = MetaKind::probe(&asset_path).map_err(|e| e.to_string())?;

        let companion_path = companion.resolve(&options.root_dir);
        if options.dry_run {
            if companion_path.symlink_metadata().is_ok() {
                return Err(format!("{} already exists", companion_path.display()));
            }
            tracing::debug!(path = %companion, ?kind, "Would create companion");
            return Ok(());
        }

        let content = render_meta(kind, self.generator.generate());
        io::create_new(&companion_path, content.as_bytes()).map_err(|e| e.to_string())?;
        tracing::debug!(path = %companion, ?kind, "Created companion");
        Ok(())
    }

    fn remove(&self, companion: &NormalizedPath, options: &FixOptions) -> std::result::Result<(), String> {
        let companion_path = companion.resolve(&options.root_dir);
        if options.dry_run {
            return match companion_path.symlink_metadata() {
                Ok(_) => {
                    tracing::debug!(path = %companion, "Would remove companion");
                    Ok(())
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Err(format!("{} does not exist", companion_path.display()))
                }
                Err(e) => Err(e.to_string()),
            };
        }

        io::remove_file(&companion_path).map_err(|e| e.to_string())?;
        tracing::debug!(path = %companion, "Removed companion");
        Ok(())
    }
}
