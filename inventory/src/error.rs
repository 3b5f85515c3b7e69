//! Error types for the inventory library.
//!
//! This module provides the error hierarchy shared by the store, the HTTP
//! API and the configuration layer, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::component::ValidationError;

/// Result type alias for operations that may fail with an inventory error.
///
/// # Examples
///
/// ```
/// use inventory::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the inventory library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or environment value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A component payload failed validation.
    #[error("invalid component: {0}")]
    InvalidComponent(#[from] ValidationError),

    /// A request body could not be decoded.
    #[error("malformed request: {reason}")]
    MalformedRequest {
        /// Why the body was rejected.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The schema version this build understands.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A blocking store task could not be joined.
    #[error("background task failed: {0}")]
    Task(String),
}

impl Error {
    /// Builds a not-found error for the component with the given id.
    #[must_use]
    pub fn component_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: format!("component {id}"),
        }
    }

    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use inventory::Error;
    ///
    /// assert!(Error::component_not_found(7).is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error was caused by the client rather than the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidComponent(_) | Self::MalformedRequest { .. } | Self::NotFound { .. }
        )
    }
}
