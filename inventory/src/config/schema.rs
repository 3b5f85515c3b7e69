//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered; the accessors fall back to the built-in defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Host the server binds to when nothing else is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the server binds to when nothing else is configured.
pub const DEFAULT_PORT: u16 = 5000;
/// SQLite busy timeout when nothing else is configured.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use inventory::config::{Config, ServerConfig};
///
/// let config = Config {
///     server: Some(ServerConfig {
///         host: None,
///         port: Some(8080),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.port(), 8080);
/// assert_eq!(config.host(), "127.0.0.1");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP listener settings.
    pub server: Option<ServerConfig>,

    /// Component database settings.
    pub database: Option<StoreSettings>,

    /// Log verbosity: quiet, normal or verbose.
    pub log_mode: Option<String>,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
}

/// Component database settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreSettings {
    /// Maximum time to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

impl Config {
    /// Configured bind host, or [`DEFAULT_HOST`].
    #[must_use]
    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Configured bind port, or [`DEFAULT_PORT`].
    #[must_use]
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT)
    }

    /// Configured busy timeout, or [`DEFAULT_BUSY_TIMEOUT_MS`].
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        let millis = self
            .database
            .as_ref()
            .and_then(|d| d.busy_timeout_ms)
            .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS);
        Duration::from_millis(millis)
    }

    /// Configured log level, if a valid one is set.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.busy_timeout(), Duration::from_millis(5000));
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r"
server:
  host: 0.0.0.0
  port: 8080
database:
  busy_timeout_ms: 250
log_mode: verbose
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.busy_timeout(), Duration::from_millis(250));
        assert_eq!(config.log_level(), Some(LogLevel::Verbose));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("sqlalchemy_uri: sqlite://\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("server:\n  debug: true\n");
        assert!(result.is_err());
    }
}
