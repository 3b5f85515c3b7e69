//! Database configuration and path resolution.
//!
//! This module provides configuration types for database connections and
//! the rules for locating the data directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the component database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "components.db";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "INVENTORY_DATA_DIR";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use inventory::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/components.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
        }
    }

    /// Creates a configuration for the database inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long a connection waits on a locked
    /// database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.inventory`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".inventory"))
}

/// Resolves the data directory from `INVENTORY_DATA_DIR` or the default.
///
/// # Errors
///
/// Returns an error if the variable is unset and the home directory cannot
/// be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path using the environment or defaults.
///
/// The resolution order is:
/// 1. `$INVENTORY_DATA_DIR/components.db` if the variable is set
/// 2. `~/.inventory/components.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `INVENTORY_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
    }

    #[test]
    fn test_config_in_data_dir() {
        let config = DatabaseConfig::in_data_dir("/srv/inventory");
        assert_eq!(config.path, PathBuf::from("/srv/inventory/components.db"));
    }

    #[test]
    fn test_config_without_auto_create() {
        let config = DatabaseConfig::new("/tmp/test.db").without_auto_create();
        assert!(!config.auto_create);
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        let saved = std::env::var_os(DATA_DIR_ENV);

        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        let path = resolve_database_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/components.db"));

        std::env::remove_var(DATA_DIR_ENV);
        if let Ok(path) = resolve_database_path() {
            assert!(path.ends_with(".inventory/components.db"));
        }

        if let Some(val) = saved {
            std::env::set_var(DATA_DIR_ENV, val);
        }
    }
}
