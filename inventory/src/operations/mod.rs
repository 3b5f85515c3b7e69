//! Administrative operations on the data directory.

pub mod init;

pub use init::{init_database, InitOptions, InitResult, DEFAULT_CONFIG_TEMPLATE};
