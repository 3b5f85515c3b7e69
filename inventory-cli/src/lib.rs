//! Library exports for inventory-cli.
//!
//! Exposes the CLI structure and command implementations so they can be
//! reused and unit tested outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
