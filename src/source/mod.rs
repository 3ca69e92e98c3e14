//! Runtime catalog access
//!
//! The navigator never touches the filesystem directly; it goes through a
//! [`CatalogSource`]. Two implementations exist:
//!
//! - [`FsSource`]: reads descriptors per folder on demand (cached) and the
//!   prebuilt manifest for search
//! - [`ManifestSource`]: serves everything from an in-memory catalog tree
//!
//! Fetch failures are "no data": an unreadable folder is an empty listing
//! and a missing manifest is `None`. Only file content reads report errors,
//! because the viewer shows them inline.

pub mod error;
mod fs;
mod manifest;

pub use error::SourceError;
pub use fs::FsSource;
pub use manifest::ManifestSource;

use crate::catalog::{CatalogNode, FileEntry, FolderEntry, is_safe_component};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Deepest folder level followed when assembling a catalog from descriptors
const MAX_ASSEMBLY_DEPTH: usize = 64;

/// Both descriptors of one folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub folders: Vec<FolderEntry>,
    pub files: Vec<FileEntry>,
}

impl Listing {
    /// Apply the display rule: folders win, then files, then nothing
    #[must_use]
    pub fn into_descriptor(self) -> Descriptor {
        if !self.folders.is_empty() {
            Descriptor::Folders(self.folders)
        } else if !self.files.is_empty() {
            Descriptor::Files(self.files)
        } else {
            Descriptor::Empty
        }
    }
}

/// What the navigator shows for one folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Folders(Vec<FolderEntry>),
    Files(Vec<FileEntry>),
    Empty,
}

/// Read access to a catalog
pub trait CatalogSource: Send + Sync {
    /// Name of the root node
    fn root_name(&self) -> String;

    /// Parsed descriptors for the folder at `path`
    fn load_listing(&self, path: &[String]) -> Listing;

    /// The full catalog tree, if one is available without walking
    fn load_catalog(&self) -> Option<CatalogNode>;

    /// On-disk location of a file, if the path is usable
    fn locate(&self, folder: &[String], name: &str) -> Option<PathBuf>;

    /// Read a text file's content
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the path is unusable or the read fails.
    fn read_text(&self, folder: &[String], name: &str) -> Result<String, SourceError> {
        let path = self
            .locate(folder, name)
            .ok_or_else(|| SourceError::InvalidPath(display_path(folder, name)))?;
        std::fs::read_to_string(&path).map_err(|source| SourceError::Io { path, source })
    }

    /// The descriptor for the folder at `path`
    fn load_descriptor(&self, path: &[String]) -> Descriptor {
        self.load_listing(path).into_descriptor()
    }
}

/// Join a content root with folder segments and a file name
///
/// Returns `None` if any segment is not a plain path component.
#[must_use]
pub fn content_path(root: &Path, folder: &[String], name: &str) -> Option<PathBuf> {
    let dir = folder_path(root, folder)?;
    is_safe_component(name).then(|| dir.join(name))
}

/// Join a content root with folder segments
#[must_use]
pub fn folder_path(root: &Path, folder: &[String]) -> Option<PathBuf> {
    folder.iter().try_fold(root.to_path_buf(), |dir, segment| {
        is_safe_component(segment).then(|| dir.join(segment))
    })
}

fn display_path(folder: &[String], name: &str) -> String {
    folder
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name))
        .collect::<Vec<_>>()
        .join("/")
}

/// Build a catalog by walking descriptors from the root
///
/// Used when no manifest is available. Unlike the manifest builder this does
/// not check that listed folders exist; a listed folder without descriptors
/// is simply empty.
pub fn assemble_catalog(source: &dyn CatalogSource) -> CatalogNode {
    let mut root = CatalogNode::root(source.root_name());
    fill_node(source, &mut root, &mut Vec::new());
    root
}

fn fill_node(source: &dyn CatalogSource, node: &mut CatalogNode, path: &mut Vec<String>) {
    let listing = source.load_listing(path);
    node.files = listing.files;

    if path.len() >= MAX_ASSEMBLY_DEPTH {
        warn!(path = %path.join("/"), "folder nesting too deep, not descending");
        return;
    }

    for entry in listing.folders {
        if !is_safe_component(&entry.name) {
            continue;
        }
        let mut child = CatalogNode::from_folder(&entry);
        path.push(entry.name);
        fill_node(source, &mut child, path);
        path.pop();
        node.folders.push(child);
    }
}

/// The source's catalog, or one assembled from descriptors
pub fn catalog_or_assemble(source: &dyn CatalogSource) -> CatalogNode {
    source.load_catalog().unwrap_or_else(|| {
        warn!("manifest not available, assembling catalog from descriptors");
        assemble_catalog(source)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::RawEntry;
    use crate::testing::{ContentTree, path};

    fn folder(label: &str) -> FolderEntry {
        FolderEntry::parse(&RawEntry::from(label))
    }

    fn file(label: &str) -> FileEntry {
        FileEntry::parse(&RawEntry::from(label))
    }

    #[test]
    fn test_folders_win_over_files() {
        let listing = Listing {
            folders: vec![folder("a")],
            files: vec![file("x.txt")],
        };
        assert_eq!(listing.into_descriptor(), Descriptor::Folders(vec![folder("a")]));
    }

    #[test]
    fn test_files_when_no_folders() {
        let listing = Listing {
            folders: vec![],
            files: vec![file("x.txt")],
        };
        assert!(matches!(listing.into_descriptor(), Descriptor::Files(f) if f.len() == 1));
        assert_eq!(Listing::default().into_descriptor(), Descriptor::Empty);
    }

    #[test]
    fn test_content_path_rejects_traversal() {
        let root = Path::new("/srv/db");
        assert_eq!(
            content_path(root, &path(&["a", "b"]), "c.txt"),
            Some(PathBuf::from("/srv/db/a/b/c.txt"))
        );
        assert_eq!(content_path(root, &path(&[".."]), "c.txt"), None);
        assert_eq!(content_path(root, &[], "../etc"), None);
    }

    #[test]
    fn test_assemble_from_descriptors() {
        let tree = ContentTree::new();
        tree.folders("", r#"["Logs:cyan", "Listed-only"]"#);
        tree.files("", r#"["root.txt"]"#);
        tree.files("Logs", r#"["day1.txt", "day2.txt:hidden"]"#);

        let source = FsSource::new(tree.root(), tree.base().join("db-manifest.json"));
        let catalog = assemble_catalog(&source);

        assert_eq!(catalog.name, "db");
        assert_eq!(catalog.files.len(), 1);
        assert_eq!(catalog.folders.len(), 2);
        assert_eq!(catalog.folders[0].files.len(), 2);
        assert!(catalog.folders[1].files.is_empty());
    }

    #[test]
    fn test_catalog_prefers_manifest() {
        let mut catalog = CatalogNode::root("db");
        catalog.files.push(file("only-in-manifest.txt"));
        let source = ManifestSource::new(catalog.clone(), "/nonexistent");

        assert_eq!(catalog_or_assemble(&source), catalog);
    }
}
