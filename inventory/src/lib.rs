#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # inventory
//!
//! A small service for keeping track of electronic components.
//!
//! Component records are stored in SQLite and exposed over a JSON HTTP API
//! with the usual create, list, fetch, replace and delete operations.
//!
//! ## Core Types
//!
//! - [`Component`] and [`ComponentFields`]: A stored record and its content
//! - [`ComponentStore`]: Durable storage shared with the HTTP layer
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use inventory::{ComponentFields, ComponentStore, DatabaseConfig};
//!
//! let store = ComponentStore::open(DatabaseConfig::new("/tmp/components.db")).unwrap();
//! let created = store
//!     .create(&ComponentFields {
//!         name: "Arduino Uno".into(),
//!         component_type: "Microcontroller".into(),
//!         version: Some("R3".into()),
//!         description: "ATmega328P board".into(),
//!         amount: 5,
//!         datasheet_url: "http://example.com/uno.pdf".into(),
//!     })
//!     .unwrap();
//! assert_eq!(store.get(created.id()).unwrap(), created);
//! ```

pub mod api;
pub mod component;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod store;

// Re-export key types at crate root for convenience
pub use component::{Component, ComponentFields, FieldViolation, ValidationError};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{resolve_log_level, LogLevel, Logger};
pub use store::ComponentStore;
