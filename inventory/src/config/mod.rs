//! Configuration system for the inventory server.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`config.yaml` in the data directory)
//! - Environment variable overrides (`INVENTORY_*`)
//! - Programmatic overrides via the builder
//! - Validation of the merged result
//!
//! # Examples
//!
//! ```no_run
//! use inventory::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/srv/inventory"))
//!     .build()
//!     .unwrap();
//! println!("serving on {}:{}", config.host(), config.port());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, ServerConfig, StoreSettings};
pub use validator::ConfigValidator;
