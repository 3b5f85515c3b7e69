//! CLI command implementations.
//!
//! - `serve`: Serve the HTTP API
//! - `init`: Initialize the data directory and database
//! - `show_data_dir`: Show resolved data directory path
//! - `validate_config`: Validate a configuration file

pub mod init;
pub mod serve;
pub mod show_data_dir;
pub mod validate_config;

pub use init::InitCommand;
pub use serve::ServeCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use validate_config::ValidateConfigCommand;
