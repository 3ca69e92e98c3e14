//! Configuration module for dbcat
//!
//! Settings are layered with the `config` crate, later sources winning:
//!
//! 1. built-in defaults
//! 2. the user file, `<config_dir>/dbcat/config.toml`
//! 3. `./dbcat.toml` in the working directory
//! 4. `DBCAT_*` environment variables (`DBCAT_ROOT`, `DBCAT_CACHE_TTL_SECS`, ...)
//!
//! Both files are optional.

mod setup;

pub use setup::interactive_init;

use crate::tags::Theme;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-local config file name
pub const LOCAL_CONFIG: &str = "dbcat.toml";

const ENV_PREFIX: &str = "DBCAT";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DbcatConfig {
    /// Content root holding the descriptors
    pub root: PathBuf,

    /// Where the manifest is written and read
    pub manifest: PathBuf,

    /// Theme outside themed folders
    pub default_theme: Theme,

    /// Theme inside hidden folders
    pub hidden_theme: Theme,

    /// Maximum number of cached folder listings
    pub cache_capacity: u64,

    /// Seconds before a cached listing is re-read
    pub cache_ttl_secs: u64,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for DbcatConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("db"),
            manifest: PathBuf::from("db-manifest.json"),
            default_theme: Theme::Green,
            hidden_theme: Theme::Purple,
            cache_capacity: 256,
            cache_ttl_secs: 300,
            quiet: false,
        }
    }
}

impl DbcatConfig {
    /// Get the path to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("dbcat").join("config.toml"))
    }

    /// Load the layered configuration
    ///
    /// A missing user config directory is not an error; that layer is skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file or variable cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let user = match Self::config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "skipping user config");
                None
            }
        };
        Self::load_from(user.as_deref(), Path::new(LOCAL_CONFIG))
    }

    /// Load defaults, then `user`, then `local`, then the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file or variable cannot be parsed.
    pub fn load_from(user: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(user) = user {
            builder = builder.add_source(File::from(user).format(FileFormat::Toml).required(false));
        }

        let settings = builder
            .add_source(File::from(local).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// The configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Cache time-to-live as a `Duration`
    #[must_use]
    pub const fn cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cache_ttl_secs)
    }
}
