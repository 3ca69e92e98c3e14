use super::{CatalogSource, Listing, SourceError, content_path, folder_path};
use crate::catalog::{
    CatalogNode, FILES_DESCRIPTOR, FOLDERS_DESCRIPTOR, FileEntry, FolderEntry, load_entries,
};
use crate::config::DbcatConfig;
use moka::sync::Cache;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_CACHE_CAPACITY: u64 = 256;
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Filesystem-backed catalog source
///
/// Listings are read on first use and kept in a bounded cache keyed by the
/// `/`-joined folder path; entries expire after the configured TTL so edits
/// to descriptors show up without a restart.
pub struct FsSource {
    root: PathBuf,
    manifest: PathBuf,
    cache: Cache<String, Listing>,
}

impl FsSource {
    /// Source over `root`, reading the catalog from `manifest`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self::with_cache(root, manifest, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }

    #[must_use]
    pub fn with_cache(
        root: impl Into<PathBuf>,
        manifest: impl Into<PathBuf>,
        capacity: u64,
        ttl: Duration,
    ) -> Self {
        Self {
            root: root.into(),
            manifest: manifest.into(),
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    #[must_use]
    pub fn from_config(config: &DbcatConfig) -> Self {
        Self::with_cache(
            &config.root,
            &config.manifest,
            config.cache_capacity,
            config.cache_ttl(),
        )
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Drop every cached listing
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    fn read_listing(&self, path: &[String]) -> Listing {
        let Some(dir) = folder_path(&self.root, path) else {
            debug!(path = %path.join("/"), "unusable folder path");
            return Listing::default();
        };

        Listing {
            folders: load_entries(&dir.join(FOLDERS_DESCRIPTOR))
                .iter()
                .map(FolderEntry::parse)
                .collect(),
            files: load_entries(&dir.join(FILES_DESCRIPTOR))
                .iter()
                .map(FileEntry::parse)
                .collect(),
        }
    }
}

impl CatalogSource for FsSource {
    fn root_name(&self) -> String {
        self.root
            .file_name()
            .map_or_else(|| "db".to_string(), |n| n.to_string_lossy().into_owned())
    }

    fn load_listing(&self, path: &[String]) -> Listing {
        let key = path.join("/");
        if let Some(listing) = self.cache.get(&key) {
            return listing;
        }

        let listing = self.read_listing(path);
        self.cache.insert(key, listing.clone());
        listing
    }

    fn load_catalog(&self) -> Option<CatalogNode> {
        let text = match fs::read_to_string(&self.manifest) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %self.manifest.display(), error = %e, "manifest not readable");
                return None;
            }
        };

        match serde_json::from_str::<CatalogNode>(&text) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!(
                    path = %self.manifest.display(),
                    error = %SourceError::from(e),
                    "ignoring unusable manifest"
                );
                None
            }
        }
    }

    fn locate(&self, folder: &[String], name: &str) -> Option<PathBuf> {
        content_path(&self.root, folder, name)
    }
}
