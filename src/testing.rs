//! Testing utilities for dbcat
//!
//! This module provides `ContentTree`, a temporary on-disk content root for
//! writing descriptors and content files in tests.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary content root that is removed on drop
///
/// Relative paths use `/` separators; `""` is the root itself. Parent
/// directories are created as needed.
///
/// # Panics
///
/// Every helper panics on I/O failure, which is what a test wants.
pub struct ContentTree {
    dir: TempDir,
}

impl ContentTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp content root");
        let tree = Self { dir };
        fs::create_dir_all(tree.root()).expect("Failed to create content root");
        tree
    }

    /// The `db` directory inside the temp dir
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("db")
    }

    /// The temp dir holding `db/`, where the manifest is written
    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    /// Create a sub-directory under the root
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.resolve(rel);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Write `folders.json` in `rel`
    pub fn folders(&self, rel: &str, json: &str) -> &Self {
        self.write(rel, crate::catalog::FOLDERS_DESCRIPTOR, json)
    }

    /// Write `files.json` in `rel`
    pub fn files(&self, rel: &str, json: &str) -> &Self {
        self.write(rel, crate::catalog::FILES_DESCRIPTOR, json)
    }

    /// Write an arbitrary file in `rel`
    pub fn write(&self, rel: &str, name: &str, content: &str) -> &Self {
        let dir = self.dir(rel);
        fs::write(dir.join(name), content).expect("Failed to write test file");
        self
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        rel.split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root(), |path, part| path.join(part))
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned path segments from string slices
pub fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| (*p).to_string()).collect()
}
