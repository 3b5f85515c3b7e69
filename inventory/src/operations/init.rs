//! Data directory initialization.
//!
//! Creates the data directory and an empty component database, optionally
//! writing a commented configuration file alongside it.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Outcome of [`init_database`].
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was written.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Written by `init --with-config`. Every setting is commented out, so the
/// file parses to the built-in defaults.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r"# Component inventory configuration

# HTTP listener (default: 127.0.0.1:5000)
# server:
#   host: 127.0.0.1
#   port: 5000

# How long to wait on a locked database, in milliseconds (default: 5000)
# database:
#   busy_timeout_ms: 5000

# quiet, normal or verbose (default: normal)
# log_mode: normal
";

/// Initializes the data directory and component database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is not set
/// - The database cannot be initialized
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use inventory::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/inventory")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// assert!(result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "Database already exists at {}. Use --overwrite to replace it.",
                    db_path.display()
                ),
            });
        }
        log::info!("removing existing database at {}", db_path.display());
        fs::remove_file(&db_path)?;
        // WAL side files belong to the old database.
        for suffix in ["-wal", "-shm"] {
            let side = PathBuf::from(format!("{}{suffix}", db_path.display()));
            if side.exists() {
                fs::remove_file(side)?;
            }
        }
    }

    Database::open(&DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("keeping existing {}", config_path.display());
        } else {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
