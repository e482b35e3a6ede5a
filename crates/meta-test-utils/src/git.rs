//! Git repository fixtures.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, IndexEntry, IndexTime, Oid, Repository};

/// Creates a minimal `.git` directory **without** initialising a real
/// git repository.
///
/// Realism level: **FAKE**: directory structure only, no object store.
///
/// Use for: tests that need a `.git` marker to satisfy nested-root
/// detection but never open the repository.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository using `git2` (no commit, no config).
///
/// Realism level: **REAL**: valid object store, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> Repository {
    Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Stages every non-ignored file of the working tree and drops deleted
/// ones from the index, like `git add -A`.
///
/// # Panics
/// Panics if the index cannot be updated.
pub fn stage_all(repo: &Repository) {
    let mut index = repo.index().expect("stage_all: failed to open index");
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .expect("stage_all: add_all failed");
    index
        .update_all(["*"], None)
        .expect("stage_all: update_all failed");
    index.write().expect("stage_all: failed to write index");
}

/// Records a gitlink (submodule) entry at `path` without cloning anything.
///
/// # Panics
/// Panics if the index cannot be updated.
pub fn add_gitlink(repo: &Repository, path: &str) {
    let mut index = repo.index().expect("add_gitlink: failed to open index");
    let entry = IndexEntry {
        ctime: IndexTime::new(0, 0),
        mtime: IndexTime::new(0, 0),
        dev: 0,
        ino: 0,
        mode: 0o160000,
        uid: 0,
        gid: 0,
        file_size: 0,
        id: Oid::from_str("1234567890abcdef1234567890abcdef12345678")
            .expect("add_gitlink: invalid oid literal"),
        flags: (path.len() as u16) & 0x0fff,
        flags_extended: 0,
        path: path.as_bytes().to_vec(),
    };
    index.add(&entry).expect("add_gitlink: failed to add entry");
    index.write().expect("add_gitlink: failed to write index");
}
