//! Database layer for persistent storage of components.
//!
//! This module provides a SQLite-based storage layer for component records,
//! including connection management, schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use inventory::database::{Database, DatabaseConfig};
//!
//! let config = DatabaseConfig::new("/tmp/components.db");
//! let db = Database::open(&config).unwrap();
//!
//! for component in db.list_components().unwrap() {
//!     println!("{component}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
