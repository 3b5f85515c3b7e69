//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{InitCommand, ServeCommand, ShowDataDirCommand, ValidateConfigCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HTTP service for an electronic component inventory.
#[derive(Parser)]
#[command(name = "inventory")]
#[command(version, about = "Serve an electronic component inventory", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INVENTORY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INVENTORY_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Do not create the database if it is missing
    #[arg(long, global = true, env = "INVENTORY_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve(ServeCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Validate a configuration file
    ValidateConfig(ValidateConfigCommand),
}
