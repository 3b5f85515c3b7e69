//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use inventory::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref server) = config.server {
            if let Some(ref host) = server.host {
                if host.trim().is_empty() {
                    return Err(Error::Validation {
                        field: "server.host".into(),
                        message: "Cannot be empty or only whitespace".into(),
                    });
                }
            }
            if server.port == Some(0) {
                return Err(Error::Validation {
                    field: "server.port".into(),
                    message: "Port must be greater than 0".into(),
                });
            }
        }

        if let Some(ref database) = config.database {
            if database.busy_timeout_ms == Some(0) {
                return Err(Error::Validation {
                    field: "database.busy_timeout_ms".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}
