//! Configuration merging and precedence handling.

use crate::config::schema::{Config, ServerConfig, StoreSettings};

/// Merges configuration layers; values set in the higher layer win.
///
/// # Examples
///
/// ```
/// use inventory::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode.as_deref(), Some("verbose"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Nested sections are merged field by field, so a layer that only sets
    /// `server.port` keeps the host from the layer below.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref server) = source.server {
            let merged = target.server.get_or_insert_with(ServerConfig::default);
            if server.host.is_some() {
                merged.host.clone_from(&server.host);
            }
            if server.port.is_some() {
                merged.port = server.port;
            }
        }

        if let Some(ref database) = source.database {
            let merged = target.database.get_or_insert_with(StoreSettings::default);
            if database.busy_timeout_ms.is_some() {
                merged.busy_timeout_ms = database.busy_timeout_ms;
            }
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_nested_fields() {
        let mut target = Config {
            server: Some(ServerConfig {
                host: Some("0.0.0.0".into()),
                port: Some(5000),
            }),
            ..Default::default()
        };
        let source = Config {
            server: Some(ServerConfig {
                host: None,
                port: Some(9000),
            }),
            database: Some(StoreSettings {
                busy_timeout_ms: Some(10),
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.host(), "0.0.0.0");
        assert_eq!(target.port(), 9000);
        assert_eq!(target.busy_timeout().as_millis(), 10);
    }

    #[test]
    fn test_merge_empty_source_is_noop() {
        let mut target = Config {
            log_mode: Some("quiet".into()),
            ..Default::default()
        };
        let before = target.clone();
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target, before);
    }
}
