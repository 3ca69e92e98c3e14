use super::SearchIndex;
use crate::source::{CatalogSource, catalog_or_assemble};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::info;

/// A search index built at most once per session
///
/// The first caller of [`LazyIndex::get_or_build`] builds the index; callers
/// that arrive while it is being built block on the same build.
#[derive(Debug, Default)]
pub struct LazyIndex {
    cell: OnceLock<SearchIndex>,
}

impl LazyIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The index, if it has been built
    #[must_use]
    pub fn get(&self) -> Option<&SearchIndex> {
        self.cell.get()
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The index, building it from `source` on first use
    ///
    /// Uses the source's catalog when it has one and otherwise assembles
    /// the catalog from per-folder descriptors.
    pub fn get_or_build(&self, source: &dyn CatalogSource) -> &SearchIndex {
        self.cell.get_or_init(|| {
            let started = Instant::now();
            let catalog = catalog_or_assemble(source);
            let index = SearchIndex::flatten(&catalog);
            info!(
                files = index.len(),
                elapsed_ms = started.elapsed().as_millis(),
                "search index ready"
            );
            index
        })
    }

    /// Forget the built index so the next search rebuilds it
    pub fn invalidate(&mut self) {
        self.cell.take();
    }
}
