//! Tree command - print the catalog with hidden/locked badges

use super::{Result, access_from_code};
use crate::config::DbcatConfig;
use crate::output::{OutputWriter, format_tree};
use crate::source::{FsSource, catalog_or_assemble};

/// Execute the tree command
///
/// # Errors
/// Returns an error if `code` is given but is not a valid access code
pub fn execute(config: &DbcatConfig, code: Option<&str>, out: &dyn OutputWriter) -> Result<()> {
    let access = access_from_code(code)?;
    let source = FsSource::from_config(config);
    out.write(&format_tree(&catalog_or_assemble(&source), access));
    Ok(())
}
