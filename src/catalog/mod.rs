//! Catalog data model
//!
//! The catalog mirrors a directory tree: every [`CatalogNode`] owns its
//! child folders and its [`FileEntry`] list, with no back-references. The
//! same types are what `db-manifest.json` serializes.
//!
//! Folder and file entries are parsed once from descriptor labels
//! ([`RawEntry`]) so nothing downstream re-inspects the label shape.

pub mod descriptor;
pub mod error;

pub use descriptor::{FILES_DESCRIPTOR, FOLDERS_DESCRIPTOR, load_entries, read_entries};
pub use error::DescriptorError;

use crate::tags::{EntryKind, HIDDEN_KEYWORD, LOCKED_KEYWORD, Level, RawEntry, Theme, resolve_level};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A folder as described by its parent's `folders.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub theme: Option<Theme>,
    pub hidden_level: Level,
    pub raw_label: String,
}

impl FolderEntry {
    #[must_use]
    pub fn parse(entry: &RawEntry) -> Self {
        let raw_label = entry.label(EntryKind::Folder).to_string();
        let parsed = entry.parse(EntryKind::Folder);

        Self {
            theme: Theme::from_tags(&parsed.tags),
            hidden_level: resolve_level(&parsed.tags, HIDDEN_KEYWORD),
            name: parsed.name,
            raw_label,
        }
    }
}

/// A file as described by its folder's `files.json`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub hidden_level: Level,
    #[serde(default)]
    pub locked_level: Level,
    #[serde(default)]
    pub raw_label: String,
}

impl FileEntry {
    #[must_use]
    pub fn parse(entry: &RawEntry) -> Self {
        let raw_label = entry.label(EntryKind::File).to_string();
        let parsed = entry.parse(EntryKind::File);

        Self {
            hidden_level: resolve_level(&parsed.tags, HIDDEN_KEYWORD),
            locked_level: resolve_level(&parsed.tags, LOCKED_KEYWORD),
            name: parsed.name,
            raw_label,
        }
    }

    /// Lower-cased text after the final `.`, if any
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    /// The name with its final extension removed
    ///
    /// # Examples
    /// ```
    /// # use dbcat::catalog::FileEntry;
    /// # use dbcat::tags::RawEntry;
    /// let file = FileEntry::parse(&RawEntry::from("notes.v2.txt:hidden"));
    /// assert_eq!(file.base_name(), "notes.v2");
    /// ```
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(base, _)| base)
    }

    #[must_use]
    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(self.extension().as_deref())
    }
}

/// How the file viewer treats a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Audio,
    Markdown,
    Text,
}

impl FileKind {
    #[must_use]
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => Self::Image,
            Some("mp3" | "wav" | "ogg" | "m4a" | "webm" | "flac") => Self::Audio,
            Some("md") => Self::Markdown,
            _ => Self::Text,
        }
    }
}

/// One folder of the catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_label: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub hidden_level: Level,
    #[serde(default)]
    pub folders: Vec<CatalogNode>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl CatalogNode {
    /// An empty root node
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_label: None,
            theme: None,
            hidden_level: Level::NONE,
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// An empty node for a parsed folder entry
    #[must_use]
    pub fn from_folder(entry: &FolderEntry) -> Self {
        Self {
            name: entry.name.clone(),
            raw_label: Some(entry.raw_label.clone()),
            theme: entry.theme,
            hidden_level: entry.hidden_level,
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// The folder entry this node would have been parsed from
    #[must_use]
    pub fn entry(&self) -> FolderEntry {
        FolderEntry {
            name: self.name.clone(),
            theme: self.theme,
            hidden_level: self.hidden_level,
            raw_label: self.raw_label.clone().unwrap_or_else(|| self.name.clone()),
        }
    }

    /// Walk down by folder names; the empty path is `self`
    #[must_use]
    pub fn find(&self, path: &[String]) -> Option<&Self> {
        path.iter().try_fold(self, |node, segment| {
            node.folders.iter().find(|child| &child.name == segment)
        })
    }

    /// Folders in this subtree, including `self`
    #[must_use]
    pub fn folder_count(&self) -> usize {
        1 + self.folders.iter().map(Self::folder_count).sum::<usize>()
    }

    /// Files in this subtree
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(Self::file_count).sum::<usize>()
    }
}

/// Ordering used for folder lists
///
/// Case-insensitive first, byte order as tiebreak so the result is total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Whether a parsed name can be used as a single path component
#[must_use]
pub fn is_safe_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
