//! Layered configuration construction.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from its layers.
///
/// Layers, lowest to highest precedence: built-in defaults, the data
/// directory's `config.yaml`, `INVENTORY_*` environment variables, and
/// programmatic overrides.
///
/// # Examples
///
/// ```
/// use inventory::config::{Config, ConfigBuilder, ServerConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         server: Some(ServerConfig { host: None, port: Some(8080) }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.port(), 8080);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory searched for `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = Some(data_dir.to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic layer with the highest precedence so far.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges and validates all layers.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an environment value is
    /// invalid, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(ref data_dir) = self.data_dir {
                if let Some(file_config) = ConfigLoader::load_from_data_dir(data_dir)? {
                    ConfigMerger::merge_into(&mut config, &file_config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
