use crate::catalog::{CatalogNode, FileEntry};
use serde::Serialize;

/// One searchable file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexEntry {
    /// Ancestor folder names and the file name, joined with `/`
    pub path: String,
    pub name: String,
    /// `name` without its final extension
    pub base_name: String,
    /// Ancestor folder names, root excluded
    pub folders: Vec<String>,
    pub parsed: FileEntry,
}

/// Flat, ordered list of every file in a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchIndexEntry>,
}

impl SearchIndex {
    /// Flatten a catalog tree
    ///
    /// Pre-order: a node's files come before its sub-folders. The root's
    /// own name is not part of any path.
    #[must_use]
    pub fn flatten(root: &CatalogNode) -> Self {
        let mut entries = Vec::with_capacity(root.file_count());
        collect(root, &mut Vec::new(), &mut entries);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchIndexEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose base name equals `query`, ignoring case
    ///
    /// The query is trimmed first; a blank query matches nothing.
    ///
    /// # Examples
    /// ```
    /// # use dbcat::catalog::{CatalogNode, FileEntry};
    /// # use dbcat::search::SearchIndex;
    /// # use dbcat::tags::RawEntry;
    /// let mut root = CatalogNode::root("db");
    /// root.files.push(FileEntry::parse(&RawEntry::from("Log.txt")));
    /// root.files.push(FileEntry::parse(&RawEntry::from("log-old.txt")));
    ///
    /// let index = SearchIndex::flatten(&root);
    /// let hits = index.lookup("log");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Log.txt");
    /// ```
    #[must_use]
    pub fn lookup(&self, query: &str) -> Vec<&SearchIndexEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.base_name.to_lowercase() == needle)
            .collect()
    }
}

fn collect(node: &CatalogNode, folders: &mut Vec<String>, out: &mut Vec<SearchIndexEntry>) {
    for file in &node.files {
        let mut path = folders.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&file.name);

        out.push(SearchIndexEntry {
            path,
            name: file.name.clone(),
            base_name: file.base_name().to_string(),
            folders: folders.clone(),
            parsed: file.clone(),
        });
    }

    for child in &node.folders {
        folders.push(child.name.clone());
        collect(child, folders, out);
        folders.pop();
    }
}
