//! Descriptor error types
//!
//! A descriptor error never escapes the folder it belongs to: callers log it
//! and continue with an empty list.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a `folders.json`/`files.json` could not be used
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The file exists but could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is empty or whitespace only
    #[error("Empty descriptor: {}", .0.display())]
    Empty(PathBuf),

    /// The content is not valid JSON
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not an array
    #[error("Descriptor is not an array: {}", .0.display())]
    NotArray(PathBuf),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
