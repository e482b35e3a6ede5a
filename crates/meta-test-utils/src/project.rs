//! [`TestProject`] builder for checker and autofix scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

use crate::git;

/// A temporary directory laid out as a Unity project or package, with
/// helper methods for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use meta_test_utils::project::TestProject;
///
/// let project = TestProject::unity_project();
/// project.asset("Assets/Foo.cs");
/// project.meta("Assets/Foo.cs");
/// project.assert_file_exists("Assets/Foo.cs.meta");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    repo: Option<Repository>,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestProject::new: failed to create temp dir"),
            repo: None,
        }
    }

    /// Create a project root with `Assets/` and `ProjectSettings/`.
    pub fn unity_project() -> Self {
        let project = Self::new();
        project.dir("Assets");
        project.dir("ProjectSettings");
        project.file("ProjectSettings/ProjectVersion.txt", "m_EditorVersion: 2022.3.0f1\n");
        project
    }

    /// Create a package root with a `package.json` manifest.
    pub fn upm_package() -> Self {
        let project = Self::new();
        project.file("package.json", "{\"name\": \"com.example.package\"}\n");
        project.meta("package.json");
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` below the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create a directory (and parents).
    pub fn dir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel))
            .unwrap_or_else(|e| panic!("TestProject::dir: failed to create {rel}: {e}"));
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestProject::file: failed to write {rel}: {e}"));
    }

    /// Write an asset file with placeholder content.
    pub fn asset(&self, rel: &str) {
        self.file(rel, "// asset\n");
    }

    /// Write the companion `.meta` file for `asset_rel`.
    pub fn meta(&self, asset_rel: &str) {
        self.file(
            &format!("{asset_rel}.meta"),
            "fileFormatVersion: 2\nguid: 00000000000000000000000000000000\n",
        );
    }

    /// Write an asset together with its companion.
    pub fn asset_with_meta(&self, rel: &str) {
        self.asset(rel);
        self.meta(rel);
    }

    /// Initialise the directory as a real git repository.
    pub fn init_git(&mut self) -> &Repository {
        self.repo.insert(git::real_git_repo(self.root()))
    }

    /// Stage the whole working tree (initialising git if needed).
    pub fn stage_all(&mut self) {
        if self.repo.is_none() {
            self.init_git();
        }
        if let Some(repo) = &self.repo {
            git::stage_all(repo);
        }
    }

    /// Remove a file below the root.
    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel))
            .unwrap_or_else(|e| panic!("TestProject::remove: failed to remove {rel}: {e}"));
    }

    /// Read a file below the root.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("Could not read file {rel}: {e}"))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
