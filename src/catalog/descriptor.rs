//! Reading per-folder descriptor files
//!
//! A missing descriptor is an empty list and not an error. Everything else
//! that prevents reading one is a [`DescriptorError`].

use super::error::DescriptorError;
use crate::tags::RawEntry;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Lists a directory's sub-folders
pub const FOLDERS_DESCRIPTOR: &str = "folders.json";

/// Lists a directory's files
pub const FILES_DESCRIPTOR: &str = "files.json";

/// Read a descriptor file
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `DescriptorError` if the file cannot be read, is empty after
/// trimming, is not valid JSON, or is not a JSON array.
pub fn read_entries(path: &Path) -> Result<Option<Vec<RawEntry>>, DescriptorError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DescriptorError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DescriptorError::Empty(path.to_path_buf()));
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|source| DescriptorError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(Some(items.iter().map(RawEntry::from).collect())),
        _ => Err(DescriptorError::NotArray(path.to_path_buf())),
    }
}

/// Read a descriptor, degrading every failure to an empty list
///
/// Failures are logged as warnings.
pub fn load_entries(path: &Path) -> Vec<RawEntry> {
    match read_entries(path) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unusable descriptor");
            Vec::new()
        }
    }
}
