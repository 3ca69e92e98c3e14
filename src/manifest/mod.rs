//! Manifest builder
//!
//! Walks a content root once, reading every folder's descriptors, and
//! produces the catalog tree together with build statistics. The tree is
//! written as `db-manifest.json` so the runtime can skip per-folder reads.
//!
//! # Failure policy
//!
//! - Missing root: fatal, nothing is written
//! - Unusable descriptor: warning, that list is empty
//! - Folder entry without a matching sub-directory: dropped silently
//!
//! Each directory is scanned by a pure function returning its node and its
//! statistics; parents merge the results of their children, so sibling
//! sub-trees are scanned in parallel with `rayon`.

pub mod error;
pub mod stats;

pub use error::ManifestError;
pub use stats::{BuildStats, FileTypeCounts, LevelHistogram, TRACKED_EXTENSIONS};

use crate::catalog::{
    CatalogNode, FILES_DESCRIPTOR, FOLDERS_DESCRIPTOR, FileEntry, FolderEntry, compare_names,
    is_safe_component, load_entries,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name used for the root node when the root path has no final component
const DEFAULT_ROOT_NAME: &str = "db";

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub catalog: CatalogNode,
    pub stats: BuildStats,
}

/// Scans a content root into a catalog
///
/// # Examples
/// ```no_run
/// use dbcat::manifest::ManifestBuilder;
///
/// let builder = ManifestBuilder::new("db");
/// let output = builder.build().unwrap();
/// ManifestBuilder::write(&output.catalog, "db-manifest.json".as_ref()).unwrap();
/// print!("{}", output.stats);
/// ```
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    root: PathBuf,
}

impl ManifestBuilder {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root directory
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::RootNotFound` if the root is not a directory.
    /// Descriptor problems below the root are never errors.
    pub fn build(&self) -> Result<BuildOutput, ManifestError> {
        if !self.root.is_dir() {
            return Err(ManifestError::RootNotFound(self.root.clone()));
        }

        let name = self
            .root
            .file_name()
            .map_or_else(|| DEFAULT_ROOT_NAME.to_string(), |n| n.to_string_lossy().into_owned());

        info!(root = %self.root.display(), "scanning content tree");
        let (catalog, stats) = scan_dir(&self.root, CatalogNode::root(name));
        info!(
            folders = stats.total_folders,
            files = stats.total_files,
            "scan complete"
        );

        Ok(BuildOutput { catalog, stats })
    }

    /// Serialize a catalog to `out` as pretty JSON
    ///
    /// The manifest is written to a sibling temporary file first and renamed
    /// into place, so a failed write never leaves a truncated manifest.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError` if serialization or any file operation fails.
    pub fn write(catalog: &CatalogNode, out: &Path) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(catalog)?;

        let mut tmp = out.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|source| ManifestError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, out).map_err(|source| ManifestError::Io {
            path: out.to_path_buf(),
            source,
        })?;

        debug!(path = %out.display(), "manifest written");
        Ok(())
    }
}

/// Scan one directory into `node`
///
/// Counts the directory itself, then its listed sub-folders (recursively)
/// and its listed files.
fn scan_dir(dir: &Path, mut node: CatalogNode) -> (CatalogNode, BuildStats) {
    let mut stats = BuildStats {
        total_folders: 1,
        ..BuildStats::default()
    };

    let folder_entries = load_entries(&dir.join(FOLDERS_DESCRIPTOR));
    let children: Vec<(FolderEntry, CatalogNode, BuildStats)> = folder_entries
        .par_iter()
        .filter_map(|raw| {
            let entry = FolderEntry::parse(raw);
            if !is_safe_component(&entry.name) {
                debug!(dir = %dir.display(), name = %entry.name, "ignoring unusable folder name");
                return None;
            }

            let sub_dir = dir.join(&entry.name);
            if !sub_dir.is_dir() {
                debug!(path = %sub_dir.display(), "listed folder missing on disk, dropping");
                return None;
            }

            let (child, child_stats) = scan_dir(&sub_dir, CatalogNode::from_folder(&entry));
            Some((entry, child, child_stats))
        })
        .collect();

    for (entry, child, child_stats) in children {
        stats.hidden_folders.record(entry.hidden_level);
        stats.merge(&child_stats);
        node.folders.push(child);
    }
    node.folders.sort_by(|a, b| compare_names(&a.name, &b.name));

    for raw in load_entries(&dir.join(FILES_DESCRIPTOR)) {
        let file = FileEntry::parse(&raw);
        stats.record_file(&file);
        node.files.push(file);
    }

    (node, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CatalogSource, FsSource};
    use crate::tags::Level;
    use crate::testing::ContentTree;

    fn build(tree: &ContentTree) -> BuildOutput {
        ManifestBuilder::new(tree.root()).build().unwrap()
    }

    #[test]
    fn test_single_folder_with_files() {
        let tree = ContentTree::new();
        tree.folders("", r#"["A"]"#);
        tree.files("A", r#"["a.txt", "b.txt:hidden2"]"#);

        let output = build(&tree);
        let catalog = &output.catalog;

        assert_eq!(catalog.name, "db");
        assert_eq!(catalog.folders.len(), 1);
        assert_eq!(catalog.folders[0].name, "A");
        assert_eq!(catalog.folders[0].files.len(), 2);

        let stats = &output.stats;
        assert_eq!(stats.total_folders, 2);
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.hidden_files.total, 1);
        assert_eq!(stats.hidden_files.levels[2], 1);
        assert_eq!(stats.file_types.txt, 2);
    }

    #[test]
    fn test_missing_subdirectory_is_dropped() {
        let tree = ContentTree::new();
        tree.folders("", r#"["Present", "Ghost:hidden3"]"#);
        tree.dir("Present");

        let output = build(&tree);
        assert_eq!(output.catalog.folders.len(), 1);
        assert_eq!(output.catalog.folders[0].name, "Present");
        assert_eq!(output.stats.total_folders, 2);
        assert_eq!(output.stats.hidden_folders.total, 0);
    }

    #[test]
    fn test_hidden_folder_counted_by_parent() {
        let tree = ContentTree::new();
        tree.folders("", r#"["Vault:hidden4:red"]"#);
        tree.dir("Vault");

        let output = build(&tree);
        let vault = &output.catalog.folders[0];
        assert_eq!(vault.hidden_level, Level::new(4).unwrap());
        assert_eq!(vault.raw_label.as_deref(), Some("Vault:hidden4:red"));
        assert_eq!(output.stats.hidden_folders.total, 1);
        assert_eq!(output.stats.hidden_folders.levels[4], 1);
    }

    #[test]
    fn test_folders_sorted_files_in_source_order() {
        let tree = ContentTree::new();
        tree.folders("", r#"["zeta", "Alpha", "beta"]"#);
        for name in ["zeta", "Alpha", "beta"] {
            tree.dir(name);
        }
        tree.files("", r#"["z.txt", "a.txt", "m.txt"]"#);

        let output = build(&tree);
        let folders: Vec<&str> = output.catalog.folders.iter().map(|f| f.name.as_str()).collect();
        let files: Vec<&str> = output.catalog.files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(folders, vec!["Alpha", "beta", "zeta"]);
        assert_eq!(files, vec!["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_invalid_descriptor_only_affects_its_folder() {
        let tree = ContentTree::new();
        tree.folders("", r#"["good", "bad"]"#);
        tree.files("good", r#"["ok.md"]"#);
        tree.files("bad", "{ not json");
        tree.folders("bad", "");

        let output = build(&tree);
        assert_eq!(output.catalog.folders.len(), 2);
        assert_eq!(output.stats.total_files, 1);
        assert_eq!(output.stats.file_types.md, 1);
        assert!(output.catalog.find(&["bad".to_string()]).unwrap().files.is_empty());
    }

    #[test]
    fn test_untracked_extensions_still_cataloged() {
        let tree = ContentTree::new();
        tree.files("", r#"["clip.wav", "pic.PNG", "song.mp3:locked1", "notes"]"#);

        let output = build(&tree);
        let stats = &output.stats;
        assert_eq!(output.catalog.files.len(), 4);
        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.file_types.png, 1);
        assert_eq!(stats.file_types.mp3, 1);
        assert_eq!(stats.file_types.txt, 0);
        assert_eq!(stats.locked_files.levels[1], 1);
    }

    #[test]
    fn test_nameless_files_are_kept_and_counted() {
        let tree = ContentTree::new();
        tree.files("", r#"[{"label": ""}, ":hidden2", "a.txt"]"#);

        let output = build(&tree);
        assert_eq!(output.catalog.files.len(), 3);
        assert_eq!(output.stats.total_files, 3);
        assert_eq!(output.stats.hidden_files.total, 1);
        assert_eq!(output.stats.hidden_files.levels[2], 1);

        let runtime = FsSource::new(tree.root(), tree.base().join("db-manifest.json"));
        assert_eq!(runtime.load_listing(&[]).files, output.catalog.files);
    }

    #[test]
    fn test_nested_stats_merge() {
        let tree = ContentTree::new();
        tree.folders("", r#"["a"]"#);
        tree.folders("a", r#"["b:hidden6"]"#);
        tree.files("a/b", r#"["x.txt:locked5", "y.txt:hidden1:locked5"]"#);

        let output = build(&tree);
        let stats = &output.stats;
        assert_eq!(stats.total_folders, 3);
        assert_eq!(stats.hidden_folders.levels[6], 1);
        assert_eq!(stats.locked_files.total, 2);
        assert_eq!(stats.locked_files.levels[5], 2);
        assert_eq!(stats.hidden_files.levels[1], 1);
    }

    #[test]
    fn test_unsafe_names_are_skipped() {
        let tree = ContentTree::new();
        tree.folders("", r#"["", "..", ".:red", "ok"]"#);
        tree.dir("ok");

        let output = build(&tree);
        assert_eq!(output.catalog.folders.len(), 1);
        assert_eq!(output.stats.total_folders, 2);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tree = ContentTree::new();
        let result = ManifestBuilder::new(tree.base().join("nope")).build();
        assert!(matches!(result, Err(ManifestError::RootNotFound(_))));
    }

    #[test]
    fn test_write_manifest_round_trip() {
        let tree = ContentTree::new();
        tree.folders("", r#"["A:blue"]"#);
        tree.files("A", r#"["a.txt"]"#);

        let output = build(&tree);
        let out = tree.base().join("db-manifest.json");
        ManifestBuilder::write(&output.catalog, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let loaded: CatalogNode = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, output.catalog);
        assert!(!tree.base().join("db-manifest.json.tmp").exists());
    }
}
