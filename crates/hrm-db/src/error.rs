//! Database error types for hrm-db.

use hrm_core::enums::EntityType;
use hrm_core::errors::CoreError;
use thiserror::Error;

/// Errors from record store operations.
///
/// Not-found is never an error here: lookups return `Option` / `bool`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., a record that does not serialize to an object).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A record key has no entry in the entity's field table.
    #[error("Unknown field '{field}' for entity type {entity_type}")]
    UnknownField {
        entity_type: EntityType,
        field: String,
    },

    /// Record (de)serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Password hashing or credential input failed.
    #[error("Credential error: {0}")]
    Credential(String),

    /// Error raised by a shared core type (e.g., an unparseable timestamp).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
