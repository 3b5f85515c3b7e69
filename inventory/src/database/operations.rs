//! Database CRUD operations for components.
//!
//! This module implements the create, read, update, and delete operations
//! for component records. Every mutation runs in its own `IMMEDIATE`
//! transaction, so a failed operation leaves no partial write behind.

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::component::{Component, ComponentFields};
use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{
    COUNT_COMPONENTS, DELETE_COMPONENT, INSERT_COMPONENT, LIST_COMPONENTS, SELECT_COMPONENT,
    UPDATE_COMPONENT,
};

/// Maps a database row to a component.
///
/// Expects row fields in this order: id, name, type, version, description,
/// amount, `datasheet_url`.
fn row_to_component(row: &rusqlite::Row<'_>) -> rusqlite::Result<Component> {
    let id: i64 = row.get(0)?;
    let fields = ComponentFields {
        name: row.get(1)?,
        component_type: row.get(2)?,
        version: row.get(3)?,
        description: row.get(4)?,
        amount: row.get(5)?,
        datasheet_url: row.get(6)?,
    };
    Ok(Component::new(id, fields))
}

impl Database {
    /// Inserts a new component and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields fail validation or the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inventory::database::{Database, DatabaseConfig};
    /// use inventory::ComponentFields;
    ///
    /// let mut db = Database::open(&DatabaseConfig::new("/tmp/components.db")).unwrap();
    /// let component = db
    ///     .create_component(&ComponentFields {
    ///         name: "Arduino Uno".into(),
    ///         component_type: "Microcontroller".into(),
    ///         version: None,
    ///         description: "ATmega328P board".into(),
    ///         amount: 5,
    ///         datasheet_url: "https://example.com/uno.pdf".into(),
    ///     })
    ///     .unwrap();
    /// println!("stored as {}", component.id());
    /// ```
    pub fn create_component(&mut self, fields: &ComponentFields) -> Result<Component> {
        fields.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            INSERT_COMPONENT,
            params![
                fields.name,
                fields.component_type,
                fields.version,
                fields.description,
                fields.amount,
                fields.datasheet_url,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        log::debug!("created component {id}");
        Ok(Component::new(id, fields.clone()))
    }

    /// Retrieves a component by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no component has this id, or a
    /// database error if the query fails.
    pub fn get_component(&self, id: i64) -> Result<Component> {
        self.conn
            .query_row(SELECT_COMPONENT, [id], row_to_component)
            .optional()?
            .ok_or_else(|| Error::component_not_found(id))
    }

    /// Lists every component in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_components(&self) -> Result<Vec<Component>> {
        let mut stmt = self.conn.prepare(LIST_COMPONENTS)?;
        let components = stmt
            .query_map([], row_to_component)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(components)
    }

    /// Overwrites every field of an existing component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no component has this id, an
    /// [`Error::InvalidComponent`] if the fields fail validation, or a
    /// database error if the update fails.
    pub fn update_component(&mut self, id: i64, fields: &ComponentFields) -> Result<Component> {
        fields.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            UPDATE_COMPONENT,
            params![
                fields.name,
                fields.component_type,
                fields.version,
                fields.description,
                fields.amount,
                fields.datasheet_url,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(Error::component_not_found(id));
        }
        tx.commit()?;

        log::debug!("updated component {id}");
        Ok(Component::new(id, fields.clone()))
    }

    /// Permanently removes a component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no component has this id, or a
    /// database error if the delete fails.
    pub fn delete_component(&mut self, id: i64) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed = tx.execute(DELETE_COMPONENT, [id])?;
        if removed == 0 {
            return Err(Error::component_not_found(id));
        }
        tx.commit()?;

        log::debug!("deleted component {id}");
        Ok(())
    }

    /// Returns the number of stored components.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_components(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_COMPONENTS, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::fixtures::{arduino_uno, resistor};
    use crate::database::test_util::create_test_database;

    #[test]
    fn test_create_and_get_component() {
        let mut db = create_test_database();

        let created = db.create_component(&arduino_uno()).unwrap();
        assert_eq!(created.id(), 1);
        assert_eq!(created.fields(), &arduino_uno());

        let fetched = db.get_component(created.id()).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_without_version() {
        let mut db = create_test_database();

        let created = db.create_component(&resistor()).unwrap();
        let fetched = db.get_component(created.id()).unwrap();
        assert_eq!(fetched.fields().version, None);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut db = create_test_database();

        let first = db.create_component(&arduino_uno()).unwrap();
        let second = db.create_component(&arduino_uno()).unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(db.count_components().unwrap(), 2);
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let mut db = create_test_database();
        let mut fields = arduino_uno();
        fields.name = String::new();

        let err = db.create_component(&fields).unwrap_err();
        assert!(matches!(err, Error::InvalidComponent(_)));
        assert_eq!(db.count_components().unwrap(), 0);
    }

    #[test]
    fn test_list_components_in_insertion_order() {
        let mut db = create_test_database();
        assert!(db.list_components().unwrap().is_empty());

        let a = db.create_component(&resistor()).unwrap();
        let b = db.create_component(&arduino_uno()).unwrap();

        let all = db.list_components().unwrap();
        assert_eq!(all, vec![a, b]);
        assert_eq!(all, db.list_components().unwrap());
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let mut db = create_test_database();
        let created = db.create_component(&arduino_uno()).unwrap();

        let updated = db.update_component(created.id(), &resistor()).unwrap();
        assert_eq!(updated.id(), created.id());

        let fetched = db.get_component(created.id()).unwrap();
        assert_eq!(fetched.fields(), &resistor());
        assert_eq!(fetched.fields().version, None);
    }

    #[test]
    fn test_update_missing_component() {
        let mut db = create_test_database();

        let err = db.update_component(999, &arduino_uno()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(db.count_components().unwrap(), 0);
    }

    #[test]
    fn test_delete_component() {
        let mut db = create_test_database();
        let created = db.create_component(&arduino_uno()).unwrap();

        db.delete_component(created.id()).unwrap();
        assert!(db.get_component(created.id()).unwrap_err().is_not_found());
        assert!(db.delete_component(created.id()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_missing_component() {
        let db = create_test_database();
        assert!(db.get_component(1).unwrap_err().is_not_found());
        assert!(db.get_component(-5).unwrap_err().is_not_found());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut db = create_test_database();
        let first = db.create_component(&arduino_uno()).unwrap();
        let second = db.create_component(&resistor()).unwrap();
        db.delete_component(second.id()).unwrap();

        let third = db.create_component(&resistor()).unwrap();
        assert!(third.id() > second.id());
        assert!(third.id() > first.id());
    }
}
