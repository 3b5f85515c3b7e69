//! Command to validate a configuration file.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use inventory::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a configuration file.
#[derive(Args)]
pub struct ValidateConfigCommand {
    /// Configuration file to validate (default: <data_dir>/config.yaml)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateConfigCommand {
    /// Execute the validate-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match self.config_path {
            Some(path) => path,
            None => ConfigLoader::config_path(&resolve_data_dir(global)?),
        };

        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let config =
            ConfigLoader::load_file(&path).map_err(|e| CliError::Config(e.to_string()))?;
        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        println!("Configuration is valid: {}", path.display());
        Ok(())
    }
}
