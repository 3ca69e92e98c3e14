//! Catalog source error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// A file could not be read
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a valid catalog
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A path segment is not a plain file or folder name
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_shows_cause_only() {
        let error = SourceError::Io {
            path: PathBuf::from("db/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(error.to_string(), "No such file");
    }

    #[test]
    fn test_invalid_path_display() {
        let error = SourceError::InvalidPath("../x".into());
        assert_eq!(error.to_string(), "Invalid path: ../x");
    }
}
