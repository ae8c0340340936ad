use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::paths::{config_path, database_path};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default export file name, as offered by the original save dialog
pub const DEFAULT_EXPORT_FILE: &str = "contacts_backup.csv";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    /// File name used for exports when no destination is given
    pub export_file: String,
}

/// Storage section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub database: Option<PathBuf>,
}

/// Transfer section of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlTransferConfig {
    pub export_file: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub transfer: Option<TomlTransferConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: database_path(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default file, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`, merging with defaults.
    ///
    /// A missing or unparsable file leaves the defaults in place.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let Ok(contents) = fs::read_to_string(path) else {
            return config;
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                config.merge(toml_config, base);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring invalid config file"
                );
            }
        }

        config
    }

    /// Apply user settings on top of the current values
    fn merge(&mut self, toml_config: TomlConfig, base: &Path) {
        if let Some(storage) = toml_config.storage {
            if let Some(database) = storage.database {
                self.database_path = if database.is_relative() {
                    base.join(database)
                } else {
                    database
                };
            }
        }

        if let Some(transfer) = toml_config.transfer {
            if let Some(export_file) = transfer.export_file {
                self.export_file = export_file;
            }
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }
}
