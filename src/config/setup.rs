//! Interactive configuration wizard
//!
//! Backs `dbcat config init --interactive`: prompts for the handful of
//! settings worth changing and writes them to the user config file.

use super::DbcatConfig;
use crate::tags::Theme;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

/// Values collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
struct SetupAnswers {
    root: String,
    manifest: String,
    default_theme: Theme,
    hidden_theme: Theme,
}

/// Prompt for content root, manifest path and themes, then save to `path`
///
/// Current values of `base` are offered as defaults.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn interactive_init(base: DbcatConfig, path: &Path) -> Result<DbcatConfig, ConfigError> {
    println!("Setting up dbcat.\n");

    let answers = prompt(&base)?;
    let config = save_answers(base, answers, path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}

fn prompt(base: &DbcatConfig) -> Result<SetupAnswers, ConfigError> {
    let theme = ColorfulTheme::default();
    let read_err = |e: dialoguer::Error| ConfigError::Message(format!("Failed to read input: {e}"));

    let root: String = Input::with_theme(&theme)
        .with_prompt("Content root")
        .default(base.root.to_string_lossy().into_owned())
        .interact_text()
        .map_err(read_err)?;

    let manifest: String = Input::with_theme(&theme)
        .with_prompt("Manifest path")
        .default(base.manifest.to_string_lossy().into_owned())
        .interact_text()
        .map_err(read_err)?;

    let default_theme: Theme = Input::with_theme(&theme)
        .with_prompt("Default theme")
        .default(base.default_theme)
        .interact_text()
        .map_err(read_err)?;

    let hidden_theme: Theme = Input::with_theme(&theme)
        .with_prompt("Hidden folder theme")
        .default(base.hidden_theme)
        .interact_text()
        .map_err(read_err)?;

    Ok(SetupAnswers {
        root,
        manifest,
        default_theme,
        hidden_theme,
    })
}

/// Merge `answers` over `base` and write the result to `path`
fn save_answers(
    base: DbcatConfig,
    answers: SetupAnswers,
    path: &Path,
) -> Result<DbcatConfig, ConfigError> {
    let config = DbcatConfig {
        root: PathBuf::from(answers.root),
        manifest: PathBuf::from(answers.manifest),
        default_theme: answers.default_theme,
        hidden_theme: answers.hidden_theme,
        ..base
    };
    config.save_to(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_answers_are_saved_over_base() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dbcat").join("config.toml");
        let base = DbcatConfig {
            cache_capacity: 16,
            ..DbcatConfig::default()
        };
        let answers = SetupAnswers {
            root: "content".into(),
            manifest: "out/manifest.json".into(),
            default_theme: Theme::Cyan,
            hidden_theme: Theme::Red2,
        };

        let saved = save_answers(base, answers, &path).unwrap();

        assert_eq!(saved.root, PathBuf::from("content"));
        assert_eq!(saved.hidden_theme, Theme::Red2);
        assert_eq!(saved.cache_capacity, 16);
        let reloaded = DbcatConfig::load_from(Some(&path), &dir.path().join("none.toml")).unwrap();
        assert_eq!(reloaded, saved);
    }
}
