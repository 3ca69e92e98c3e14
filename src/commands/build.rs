//! Build command - scan the content root and write the manifest

use super::Result;
use crate::config::DbcatConfig;
use crate::manifest::{BuildStats, ManifestBuilder};
use crate::output::OutputWriter;

/// Execute the build command
///
/// Nothing is written when the root is missing.
///
/// # Errors
/// Returns an error if the content root does not exist or the manifest cannot be written
pub fn execute(config: &DbcatConfig, out: &dyn OutputWriter, quiet: bool) -> Result<BuildStats> {
    let output = ManifestBuilder::new(&config.root).build()?;
    ManifestBuilder::write(&output.catalog, &config.manifest)?;

    if !quiet {
        out.success(&format!("Manifest written to {}", config.manifest.display()));
        out.write(output.stats.to_string().trim_end());
    }

    Ok(output.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbcatError;
    use crate::manifest::ManifestError;
    use crate::output::BufferWriter;
    use crate::testing::ContentTree;

    fn config_for(tree: &ContentTree) -> DbcatConfig {
        DbcatConfig {
            root: tree.root(),
            manifest: tree.base().join("db-manifest.json"),
            ..DbcatConfig::default()
        }
    }

    #[test]
    fn test_build_writes_manifest_and_report() {
        let tree = ContentTree::new();
        tree.folders("", r#"["A"]"#);
        tree.files("A", r#"["a.txt", "b.txt:hidden2"]"#);
        let config = config_for(&tree);
        let out = BufferWriter::new();

        let stats = execute(&config, &out, false).unwrap();

        assert_eq!(stats.total_files, 2);
        assert!(config.manifest.exists());
        let text = out.text();
        assert!(text.contains("Manifest written to"));
        assert!(text.contains("Total files: 2"));
        assert!(text.contains("Level 9 (hidden2): 1"));
    }

    #[test]
    fn test_quiet_build_prints_nothing() {
        let tree = ContentTree::new();
        let out = BufferWriter::new();
        execute(&config_for(&tree), &out, true).unwrap();
        assert!(out.messages().is_empty());
    }

    #[test]
    fn test_missing_root_writes_nothing() {
        let tree = ContentTree::new();
        let config = DbcatConfig {
            root: tree.base().join("absent"),
            ..config_for(&tree)
        };
        let out = BufferWriter::new();

        let result = execute(&config, &out, false);

        assert!(matches!(
            result,
            Err(DbcatError::Manifest(ManifestError::RootNotFound(_)))
        ));
        assert!(!config.manifest.exists());
        assert!(out.messages().is_empty());
    }
}
