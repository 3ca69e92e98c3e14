use super::{CatalogSource, Listing, SourceError, content_path};
use crate::catalog::CatalogNode;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog source backed by an in-memory catalog tree
///
/// Listings come from the tree; file content is still read from
/// `content_root`.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    catalog: CatalogNode,
    content_root: PathBuf,
}

impl ManifestSource {
    #[must_use]
    pub fn new(catalog: CatalogNode, content_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            content_root: content_root.into(),
        }
    }

    /// Load a manifest file
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file cannot be read or is not a catalog.
    pub fn open(manifest: &Path, content_root: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let text = fs::read_to_string(manifest).map_err(|source| SourceError::Io {
            path: manifest.to_path_buf(),
            source,
        })?;
        let catalog = serde_json::from_str(&text)?;
        Ok(Self::new(catalog, content_root))
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogNode {
        &self.catalog
    }
}

impl CatalogSource for ManifestSource {
    fn root_name(&self) -> String {
        self.catalog.name.clone()
    }

    fn load_listing(&self, path: &[String]) -> Listing {
        self.catalog
            .find(path)
            .map(|node| Listing {
                folders: node.folders.iter().map(CatalogNode::entry).collect(),
                files: node.files.clone(),
            })
            .unwrap_or_default()
    }

    fn load_catalog(&self) -> Option<CatalogNode> {
        Some(self.catalog.clone())
    }

    fn locate(&self, folder: &[String], name: &str) -> Option<PathBuf> {
        content_path(&self.content_root, folder, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FileEntry, FolderEntry};
    use crate::source::Descriptor;
    use crate::tags::RawEntry;
    use crate::testing::path;

    fn catalog() -> CatalogNode {
        let mut root = CatalogNode::root("db");
        let mut logs =
            CatalogNode::from_folder(&FolderEntry::parse(&RawEntry::from("Logs:hidden2")));
        logs.files.push(FileEntry::parse(&RawEntry::from("day.txt")));
        root.folders.push(logs);
        root
    }

    #[test]
    fn test_listing_from_tree() {
        let source = ManifestSource::new(catalog(), "/srv/db");

        let root = source.load_listing(&[]);
        assert_eq!(root.folders.len(), 1);
        assert_eq!(root.folders[0].raw_label, "Logs:hidden2");

        let logs = source.load_descriptor(&path(&["Logs"]));
        assert!(matches!(logs, Descriptor::Files(files) if files[0].name == "day.txt"));
    }

    #[test]
    fn test_unknown_path_is_empty() {
        let source = ManifestSource::new(catalog(), "/srv/db");
        assert_eq!(source.load_descriptor(&path(&["Nope"])), Descriptor::Empty);
    }

    #[test]
    fn test_open_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("db-manifest.json");
        std::fs::write(&manifest, "{").unwrap();

        let result = ManifestSource::open(&manifest, dir.path());
        assert!(matches!(result, Err(SourceError::Manifest(_))));
    }

    #[test]
    fn test_locate_under_content_root() {
        let source = ManifestSource::new(catalog(), "/srv/db");
        assert_eq!(
            source.locate(&path(&["Logs"]), "day.txt"),
            Some(PathBuf::from("/srv/db/Logs/day.txt"))
        );
    }
}
