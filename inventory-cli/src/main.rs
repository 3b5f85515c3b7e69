//! Main entry point for the inventory CLI.
//!
//! Commands:
//! - `serve`: Serve the component HTTP API
//! - `init`: Initialize the data directory and database
//! - `show-data-dir`: Print the resolved data directory
//! - `validate-config`: Check a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use inventory::{resolve_log_level, Logger};
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let configured = utils::configured_log_level(&global);
    Logger::new(resolve_log_level(global.verbose, global.quiet, configured)).install();

    let result = match cli.command {
        cli::Command::Serve(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::ValidateConfig(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
