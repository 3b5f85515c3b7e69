//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! data directory resolution, configuration loading and store opening.

use crate::error::CliError;
use inventory::database::{self, DATABASE_FILE_NAME};
use inventory::{ComponentStore, Config, ConfigBuilder, DatabaseConfig, LogLevel};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Do not create a missing database.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `INVENTORY_DATA_DIR`, else
/// `~/.inventory`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `overrides` (command-line flags, highest priority)
/// 2. Environment variables
/// 3. `<data_dir>/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(
    global: &GlobalOptions,
    overrides: Option<Config>,
) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let mut builder = ConfigBuilder::new().with_data_dir(&data_dir);
    if let Some(overrides) = overrides {
        builder = builder.with_config(overrides);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Log level from the configuration, ignoring configuration errors.
///
/// Used before the logger exists; commands that need the configuration
/// report its errors themselves.
pub fn configured_log_level(global: &GlobalOptions) -> Option<LogLevel> {
    load_configuration(global, None)
        .ok()
        .and_then(|config| config.log_level())
}

/// Open the component store.
///
/// `--busy-timeout` takes precedence over the configured timeout.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<ComponentStore, CliError> {
    let data_dir = resolve_data_dir(global)?;

    if global.disable_autoinit && !data_dir.join(DATABASE_FILE_NAME).exists() {
        return Err(CliError::NoDataDirectory);
    }

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), |secs| Duration::from_secs(secs.into()));

    let mut db_config = DatabaseConfig::in_data_dir(&data_dir).with_busy_timeout(busy_timeout);
    if global.disable_autoinit {
        db_config = db_config.without_auto_create();
    }

    ComponentStore::open(db_config).map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_for(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_explicit_data_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(&options_for(&dir)).unwrap(), dir.path());
    }

    #[test]
    fn test_open_store_respects_disable_autoinit() {
        let dir = TempDir::new().unwrap();
        let mut global = options_for(&dir);
        global.disable_autoinit = true;

        let err = open_store(&global, &Config::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        global.disable_autoinit = false;
        open_store(&global, &Config::default()).unwrap();
        assert!(dir.path().join(DATABASE_FILE_NAME).exists());
    }

    #[test]
    fn test_busy_timeout_flag_wins() {
        let dir = TempDir::new().unwrap();
        let mut global = options_for(&dir);
        global.busy_timeout = Some(2);

        let store = open_store(&global, &Config::default()).unwrap();
        assert_eq!(store.config().busy_timeout, Duration::from_secs(2));
    }
}
