//! Command to show the resolved data directory path.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;

/// Show the resolved data directory path.
#[derive(Args)]
pub struct ShowDataDirCommand {}

impl ShowDataDirCommand {
    /// Execute the show-data-dir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", resolve_data_dir(global)?.display());
        Ok(())
    }
}
