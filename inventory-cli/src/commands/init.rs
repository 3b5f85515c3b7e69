//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the data directory and component database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Parser;
use inventory::config::CONFIG_FILE_NAME;
use inventory::database::DATABASE_FILE_NAME;
use inventory::operations::{init_database, InitOptions};
use std::path::Path;

/// Initialize the data directory and component database.
#[derive(Parser)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        if self.dry_run {
            self.describe(&data_dir);
            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);
        let result = init_database(&options)?;

        println!("Initialized inventory in: {}", result.data_dir.display());
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }

    fn describe(&self, data_dir: &Path) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize inventory in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        let db_path = data_dir.join(DATABASE_FILE_NAME);
        match (db_path.exists(), self.overwrite) {
            (true, true) => {
                println!("  - Remove existing database: {}", db_path.display());
                println!("  - Create new database: {}", db_path.display());
            }
            (true, false) => println!(
                "  - ERROR: Database already exists (use --overwrite to replace): {}",
                db_path.display()
            ),
            (false, _) => println!("  - Create database: {}", db_path.display()),
        }

        if self.with_config {
            let config_path = data_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}
