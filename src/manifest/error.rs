//! Manifest build error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a manifest build
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The content root does not exist or is not a directory
    #[error("db folder not found at {}", .0.display())]
    RootNotFound(PathBuf),

    /// Writing the manifest failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog could not be serialized
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_message() {
        let error = ManifestError::RootNotFound(PathBuf::from("/srv/site/db"));
        assert_eq!(error.to_string(), "db folder not found at /srv/site/db");
    }

    #[test]
    fn test_io_error_names_path() {
        let error = ManifestError::Io {
            path: PathBuf::from("out.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(error.to_string().contains("out.json"));
        assert!(error.to_string().contains("disk full"));
    }
}
