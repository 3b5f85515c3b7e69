//! The component store: the persistence handle shared with the HTTP layer.
//!
//! A [`ComponentStore`] holds no connection of its own. Each operation opens a
//! [`Database`], runs in a single transaction and releases the connection,
//! so a store can be cloned freely and shared between concurrent requests.

use crate::component::{Component, ComponentFields};
use crate::database::{Database, DatabaseConfig};
use crate::error::Result;

/// Durable mapping from component id to component record.
///
/// # Examples
///
/// ```no_run
/// use inventory::{ComponentStore, DatabaseConfig};
///
/// let store = ComponentStore::open(DatabaseConfig::new("/tmp/components.db")).unwrap();
/// println!("{} components", store.list_all().unwrap().len());
/// ```
#[derive(Debug, Clone)]
pub struct ComponentStore {
    config: DatabaseConfig,
}

impl ComponentStore {
    /// Opens the store, creating and initializing the database if needed.
    ///
    /// The database is opened once here so schema problems surface at
    /// startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or has an
    /// incompatible schema.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        Database::open(&config)?;
        log::info!("component store ready at {}", config.path.display());
        Ok(Self { config })
    }

    /// Returns the database configuration backing this store.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn connect(&self) -> Result<Database> {
        Database::open(&self.config)
    }

    /// Persists a new component and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields are invalid or the write fails.
    pub fn create(&self, fields: &ComponentFields) -> Result<Component> {
        self.connect()?.create_component(fields)
    }

    /// Returns every stored component in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn list_all(&self) -> Result<Vec<Component>> {
        self.connect()?.list_components()
    }

    /// Looks up a component by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id.
    pub fn get(&self, id: i64) -> Result<Component> {
        self.connect()?.get_component(id)
    }

    /// Replaces every field of an existing component.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id.
    pub fn update(&self, id: i64, fields: &ComponentFields) -> Result<Component> {
        self.connect()?.update_component(id, fields)
    }

    /// Permanently removes a component.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for an unknown id.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.connect()?.delete_component(id)
    }

    /// Returns the number of stored components.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn count(&self) -> Result<usize> {
        self.connect()?.count_components()
    }
}
