//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `INVENTORY_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{Config, ServerConfig, StoreSettings};
use crate::error::{Error, Result};
use crate::logging::LOG_MODE_ENV;

/// Overrides the bind host.
pub const HOST_ENV: &str = "INVENTORY_HOST";
/// Overrides the bind port.
pub const PORT_ENV: &str = "INVENTORY_PORT";
/// Overrides the database busy timeout, in milliseconds.
pub const BUSY_TIMEOUT_MS_ENV: &str = "INVENTORY_BUSY_TIMEOUT_MS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use inventory::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric port).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(host) = env::var(HOST_ENV) {
            config
                .server
                .get_or_insert_with(ServerConfig::default)
                .host = Some(host);
        }

        if let Ok(port) = env::var(PORT_ENV) {
            let port = port.trim().parse().map_err(|_| Error::Validation {
                field: PORT_ENV.into(),
                message: "Invalid port number".into(),
            })?;
            config
                .server
                .get_or_insert_with(ServerConfig::default)
                .port = Some(port);
        }

        if let Ok(millis) = env::var(BUSY_TIMEOUT_MS_ENV) {
            let millis = millis.trim().parse().map_err(|_| Error::Validation {
                field: BUSY_TIMEOUT_MS_ENV.into(),
                message: "Must be a positive integer".into(),
            })?;
            config
                .database
                .get_or_insert_with(StoreSettings::default)
                .busy_timeout_ms = Some(millis);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        Ok(())
    }
}
