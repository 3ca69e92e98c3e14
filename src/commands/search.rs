//! Search command - exact base-name lookup over the catalog

use super::{Result, access_from_code};
use crate::access::is_visible;
use crate::config::DbcatConfig;
use crate::output::{OutputWriter, format_search_results};
use crate::search::SearchIndex;
use crate::source::{CatalogSource, FsSource, catalog_or_assemble};

/// Execute the search command
///
/// Hidden files are left out unless `code` grants their level. Returns the
/// number of files printed.
///
/// # Errors
/// Returns an error if `code` is given but is not a valid access code
pub fn execute(
    config: &DbcatConfig,
    query: &str,
    code: Option<&str>,
    out: &dyn OutputWriter,
) -> Result<usize> {
    let source = FsSource::from_config(config);
    run(&source, query, code, out)
}

fn run(
    source: &dyn CatalogSource,
    query: &str,
    code: Option<&str>,
    out: &dyn OutputWriter,
) -> Result<usize> {
    let access = access_from_code(code)?;
    let index = SearchIndex::flatten(&catalog_or_assemble(source));

    let hits: Vec<_> = index
        .lookup(query)
        .into_iter()
        .filter(|entry| is_visible(entry.parsed.hidden_level, access))
        .collect();

    for line in format_search_results(&hits) {
        out.write(&line);
    }
    Ok(hits.len())
}
