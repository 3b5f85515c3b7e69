//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions and statements used by the
//! component store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the components table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again, so an id never resolves to a different component.
pub const CREATE_COMPONENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS components (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL,
        type VARCHAR(100) NOT NULL,
        version VARCHAR(50),
        description TEXT NOT NULL,
        amount INTEGER NOT NULL,
        datasheet_url VARCHAR(200) NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a component. The id is assigned by SQLite.
pub const INSERT_COMPONENT: &str = r"
    INSERT INTO components
    (name, type, version, description, amount, datasheet_url)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to overwrite every mutable column of a component.
pub const UPDATE_COMPONENT: &str = r"
    UPDATE components
    SET name = ?, type = ?, version = ?, description = ?, amount = ?, datasheet_url = ?
    WHERE id = ?
";

/// SQL statement to delete a component by id.
pub const DELETE_COMPONENT: &str = "DELETE FROM components WHERE id = ?";

/// SQL statement to fetch a single component by id.
pub const SELECT_COMPONENT: &str = r"
    SELECT id, name, type, version, description, amount, datasheet_url
    FROM components
    WHERE id = ?
";

/// SQL statement to list all components in insertion order.
pub const LIST_COMPONENTS: &str = r"
    SELECT id, name, type, version, description, amount, datasheet_url
    FROM components
    ORDER BY id
";

/// SQL statement to count stored components.
pub const COUNT_COMPONENTS: &str = "SELECT COUNT(*) FROM components";
