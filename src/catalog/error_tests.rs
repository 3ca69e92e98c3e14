//! Unit tests for descriptor error types

#[cfg(test)]
mod tests {
    use crate::catalog::error::DescriptorError;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_empty_error_display() {
        let error = DescriptorError::Empty(PathBuf::from("db/files.json"));
        assert_eq!(error.to_string(), "Empty descriptor: db/files.json");
    }

    #[test]
    fn test_not_array_display() {
        let error = DescriptorError::NotArray(PathBuf::from("db/folders.json"));
        assert!(error.to_string().contains("not an array"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_json_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error = DescriptorError::Json {
            path: PathBuf::from("x/files.json"),
            source,
        };
        assert!(error.to_string().starts_with("Invalid JSON in x/files.json"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error_display() {
        let error = DescriptorError::Io {
            path: PathBuf::from("locked/folders.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{error}");
        assert!(display.contains("locked/folders.json"));
        assert!(display.contains("denied"));
    }
}
