//! Config command - show or create the configuration file

use super::Result;
use crate::cli::ConfigCommands;
use crate::config::{DbcatConfig, interactive_init};
use crate::output::OutputWriter;
use std::path::Path;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the config path cannot be determined or written
pub fn execute(
    config: &DbcatConfig,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => out.write(config.to_toml()?.trim_end()),
        ConfigCommands::Init { interactive, force } => {
            let path = DbcatConfig::config_path()?;
            init(&path, *interactive, *force, out)?;
        }
    }
    Ok(())
}

fn init(path: &Path, interactive: bool, force: bool, out: &dyn OutputWriter) -> Result<()> {
    if path.exists() && !force {
        out.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    if interactive {
        interactive_init(DbcatConfig::default(), path)?;
    } else {
        DbcatConfig::default().save_to(path)?;
        out.success(&format!("Wrote default config to {}", path.display()));
    }
    Ok(())
}
