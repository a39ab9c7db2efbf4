//! Field mapper: external records ↔ storage columns.
//!
//! The external shape is a JSON object keyed by camelCase names, with
//! structured fields as native arrays / objects. The storage shape is a list
//! of (column, libSQL value) pairs with structured fields as JSON text.
//!
//! Keys are translated through the entity's [`Descriptor`] field table, never
//! by string transformation. A key missing from the table is an error.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DatabaseError;
use crate::schema::{Descriptor, Field, FieldKind};

/// A record in the external representation.
pub type Record = Map<String, Value>;

/// Serialize a typed value (entity, draft, patch) into an external record.
///
/// Patch fields left as `None` are skipped by their serde attributes, so they
/// are absent from the record rather than `null`.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` if serialization fails, or
/// `DatabaseError::InvalidState` if the value is not a JSON object.
pub fn to_record<T: Serialize>(value: &T) -> Result<Record, DatabaseError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(DatabaseError::InvalidState(format!(
            "expected a record object, got {other}"
        ))),
    }
}

/// Convert an external record to storage columns.
///
/// Arrays and objects become JSON text; booleans become 0/1; `null`, numbers
/// and strings pass through. Output order follows the record's key order.
///
/// # Errors
///
/// Returns `DatabaseError::UnknownField` for a key with no descriptor entry.
pub fn to_storage(
    descriptor: &'static Descriptor,
    record: &Record,
) -> Result<Vec<(&'static Field, libsql::Value)>, DatabaseError> {
    record
        .iter()
        .map(|(key, value)| {
            let field = descriptor
                .field(key)
                .ok_or_else(|| DatabaseError::UnknownField {
                    entity_type: descriptor.entity_type,
                    field: key.clone(),
                })?;
            Ok((field, encode_value(value)?))
        })
        .collect()
}

/// Convert storage columns back to an external record.
///
/// # Errors
///
/// Returns `DatabaseError::UnknownField` for a column with no descriptor entry.
pub fn from_storage<'c>(
    descriptor: &'static Descriptor,
    columns: impl IntoIterator<Item = (&'c str, libsql::Value)>,
) -> Result<Record, DatabaseError> {
    let mut record = Record::new();
    for (column, value) in columns {
        let field = descriptor
            .field_by_column(column)
            .ok_or_else(|| DatabaseError::UnknownField {
                entity_type: descriptor.entity_type,
                field: column.to_string(),
            })?;
        record.insert(field.name.to_string(), decode_value(field, value));
    }
    Ok(record)
}

/// Decode a row selected with `descriptor.column_list()`.
///
/// # Errors
///
/// Returns `DatabaseError` if a column cannot be read.
pub fn from_row(
    descriptor: &'static Descriptor,
    row: &libsql::Row,
) -> Result<Record, DatabaseError> {
    let mut columns = Vec::with_capacity(descriptor.fields.len());
    for (idx, field) in (0_i32..).zip(descriptor.fields) {
        columns.push((field.column, row.get_value(idx)?));
    }
    from_storage(descriptor, columns)
}

pub(crate) fn encode_value(value: &Value) -> Result<libsql::Value, DatabaseError> {
    Ok(match value {
        Value::Null => libsql::Value::Null,
        Value::Bool(b) => libsql::Value::Integer(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                libsql::Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                libsql::Value::Real(f)
            } else {
                return Err(DatabaseError::InvalidState(format!(
                    "number {n} does not fit a storage column"
                )));
            }
        }
        Value::String(s) => libsql::Value::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => libsql::Value::Text(serde_json::to_string(value)?),
    })
}

/// Decode one stored value according to its field kind.
///
/// Structured text that fails to parse is returned as the raw string.
#[must_use]
pub fn decode_value(field: &Field, value: libsql::Value) -> Value {
    match (field.kind, value) {
        (_, libsql::Value::Null) => Value::Null,
        (FieldKind::Structured, libsql::Value::Text(text)) => {
            match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!(field = field.name, error = %e, "structured field kept as raw text");
                    Value::String(text)
                }
            }
        }
        (FieldKind::Boolean, libsql::Value::Integer(i)) => Value::Bool(i != 0),
        (_, libsql::Value::Integer(i)) => Value::from(i),
        (_, libsql::Value::Real(f)) => {
            serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
        }
        (_, libsql::Value::Text(text)) => Value::String(text),
        (_, libsql::Value::Blob(bytes)) => Value::from(bytes),
    }
}
