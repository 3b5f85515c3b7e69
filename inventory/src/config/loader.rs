//! Configuration file loading.
//!
//! The only configuration file is `config.yaml` in the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use inventory::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(config) = ConfigLoader::load_from_data_dir(Path::new("/srv/inventory")).unwrap() {
///     println!("port: {}", config.port());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Returns the configuration file path for a data directory.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads `config.yaml` from the data directory, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<Config>> {
        let path = Self::config_path(data_dir);
        if !path.exists() {
            return Ok(None);
        }
        log::debug!("loading configuration from {}", path.display());
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A file holding only blank lines and comments is an empty
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let has_content = contents
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
