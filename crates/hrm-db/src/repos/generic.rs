//! Generic CRUD repository, one instantiation per entity type.
//!
//! Every mutation runs in a write transaction together with its audit entry:
//! either both land or neither does.

use std::marker::PhantomData;

use hrm_core::entities::Actor;
use hrm_core::enums::AuditAction;
use serde_json::Value;
use tracing::debug;

use crate::HrmDb;
use crate::error::DatabaseError;
use crate::helpers::{new_id, timestamp_after};
use crate::mapper::{Record, encode_value, from_row, to_record, to_storage};
use crate::repos::audit::{self, NewAuditEntry};
use crate::schema::{CREATED_AT, Descriptor, Entity, Field, FieldKind, ID, UPDATED_AT};

/// CRUD access to the table behind `E`.
///
/// Obtained from [`crate::service::HrmService::repo`] or one of its named
/// accessors. Holds no state besides the database handle and the acting user.
pub struct Repository<'a, E: Entity> {
    db: &'a HrmDb,
    actor: Option<&'a Actor>,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: Entity> Repository<'a, E> {
    pub(crate) const fn new(db: &'a HrmDb, actor: Option<&'a Actor>) -> Self {
        Self {
            db,
            actor,
            _entity: PhantomData,
        }
    }

    const fn descriptor() -> &'static Descriptor {
        E::DESCRIPTOR
    }

    /// Every record, newest `createdAt` first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn all(&self) -> Result<Vec<E>, DatabaseError> {
        let desc = Self::descriptor();
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, rowid DESC",
            desc.column_list(),
            desc.table
        );
        let records = select_many(self.db.conn(), desc, &sql, Vec::new()).await?;
        debug!(table = desc.table, count = records.len(), "listed records");
        records.into_iter().map(decode::<E>).collect()
    }

    /// The record with `id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn get(&self, id: &str) -> Result<Option<E>, DatabaseError> {
        select_by_id(self.db.conn(), Self::descriptor(), id)
            .await?
            .map(decode::<E>)
            .transpose()
    }

    /// Records whose scalar field `field` (external name) equals `value`,
    /// newest first. A `null` value matches NULL columns.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::UnknownField` if `field` is not in the field
    /// table, `DatabaseError::InvalidState` if it is a structured field, or
    /// `DatabaseError` if the query fails.
    pub async fn find_by(&self, field: &str, value: &Value) -> Result<Vec<E>, DatabaseError> {
        let desc = Self::descriptor();
        let field = desc.field(field).ok_or_else(|| DatabaseError::UnknownField {
            entity_type: desc.entity_type,
            field: field.to_string(),
        })?;
        if field.kind == FieldKind::Structured {
            return Err(DatabaseError::InvalidState(format!(
                "cannot filter on structured field '{}'",
                field.name
            )));
        }

        let (condition, params) = if value.is_null() {
            (format!("{} IS NULL", field.column), Vec::new())
        } else {
            (format!("{} = ?1", field.column), vec![encode_value(value)?])
        };
        let sql = format!(
            "SELECT {} FROM {} WHERE {condition} ORDER BY created_at DESC, rowid DESC",
            desc.column_list(),
            desc.table
        );
        let records = select_many(self.db.conn(), desc, &sql, params).await?;
        records.into_iter().map(decode::<E>).collect()
    }

    /// Insert a new record built from `draft` and audit it.
    ///
    /// The store assigns `id`, `createdAt` and `updatedAt`. The audit entry's
    /// changes are the draft exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the draft does not map onto the table, a
    /// constraint is violated, or the audit append fails. Nothing is written
    /// in that case.
    pub async fn create(&self, draft: &E::Draft) -> Result<E, DatabaseError> {
        let desc = Self::descriptor();
        let changes = to_record(draft)?;

        let id = new_id();
        let now = timestamp_after(None)?;
        let mut merged = changes.clone();
        merged.insert(ID.name.to_string(), Value::String(id.clone()));
        merged.insert(CREATED_AT.name.to_string(), Value::String(now.clone()));
        merged.insert(UPDATED_AT.name.to_string(), Value::String(now.clone()));
        let columns = to_storage(desc, &merged)?;
        let changes = Value::Object(changes);

        let tx = self.db.begin_write().await?;
        let result = async {
            insert_row(tx.conn(), desc, columns).await?;
            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: &id,
                    entity_type: desc.entity_type,
                    action: AuditAction::Create,
                    changes: &changes,
                    timestamp: &now,
                    actor: self.actor,
                },
            )
            .await?;
            let record = select_by_id(tx.conn(), desc, &id)
                .await?
                .ok_or(DatabaseError::NoResult)?;
            decode::<E>(record)
        }
        .await;
        let created = tx.finish(result).await?;

        debug!(table = desc.table, %id, "created record");
        Ok(created)
    }

    /// Shallow-merge `patch` over the stored record and audit it.
    ///
    /// Keys absent from the patch keep their stored values; explicit `null`
    /// clears a nullable column. `id` and `createdAt` never change and
    /// `updatedAt` is refreshed. Returns the record as stored after the write,
    /// or `None` if `id` does not exist (nothing is written or audited).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on mapping, constraint or audit failures.
    /// Nothing is written in that case.
    pub async fn update(&self, id: &str, patch: &E::Patch) -> Result<Option<E>, DatabaseError> {
        let desc = Self::descriptor();
        let changes = to_record(patch)?;
        for protected in [ID.name, CREATED_AT.name, UPDATED_AT.name] {
            if changes.contains_key(protected) {
                return Err(DatabaseError::InvalidState(format!(
                    "'{protected}' is managed by the store"
                )));
            }
        }
        // Validate keys before touching the database.
        to_storage(desc, &changes)?;
        let changes_value = Value::Object(changes.clone());

        let tx = self.db.begin_write().await?;
        let result = async {
            let Some(mut merged) = select_by_id(tx.conn(), desc, id).await? else {
                return Ok(None);
            };
            let now = timestamp_after(merged.get(UPDATED_AT.name).and_then(Value::as_str))?;
            merged.extend(changes);
            merged.insert(UPDATED_AT.name.to_string(), Value::String(now.clone()));

            let columns = to_storage(desc, &merged)?;
            update_row(tx.conn(), desc, id, columns).await?;
            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: id,
                    entity_type: desc.entity_type,
                    action: AuditAction::Update,
                    changes: &changes_value,
                    timestamp: &now,
                    actor: self.actor,
                },
            )
            .await?;
            select_by_id(tx.conn(), desc, id)
                .await?
                .map(decode::<E>)
                .transpose()
        }
        .await;
        let updated = tx.finish(result).await?;

        match updated {
            Some(updated) => {
                debug!(table = desc.table, %id, "updated record");
                Ok(Some(updated))
            }
            None => {
                debug!(table = desc.table, %id, "update skipped, record not found");
                Ok(None)
            }
        }
    }

    /// Delete the record with `id` and audit it with empty changes.
    ///
    /// Returns `false` if no such record exists; nothing is audited then.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DELETE or the audit append fails.
    /// Nothing is deleted in that case.
    pub async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let desc = Self::descriptor();
        let empty = Value::Object(Record::new());

        let tx = self.db.begin_write().await?;
        let result = async {
            let sql = format!("DELETE FROM {} WHERE id = ?1", desc.table);
            let affected = tx.conn().execute(&sql, [id]).await?;
            if affected == 0 {
                return Ok(false);
            }
            let now = timestamp_after(None)?;
            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: id,
                    entity_type: desc.entity_type,
                    action: AuditAction::Delete,
                    changes: &empty,
                    timestamp: &now,
                    actor: self.actor,
                },
            )
            .await?;
            Ok::<_, DatabaseError>(true)
        }
        .await;
        let deleted = tx.finish(result).await?;

        debug!(table = desc.table, %id, deleted, "delete");
        Ok(deleted)
    }
}

fn decode<E: Entity>(record: Record) -> Result<E, DatabaseError> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

async fn select_by_id(
    conn: &libsql::Connection,
    desc: &'static Descriptor,
    id: &str,
) -> Result<Option<Record>, DatabaseError> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?1",
        desc.column_list(),
        desc.table
    );
    let mut rows = conn.query(&sql, [id]).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(from_row(desc, &row)?)),
        None => Ok(None),
    }
}

async fn select_many(
    conn: &libsql::Connection,
    desc: &'static Descriptor,
    sql: &str,
    params: Vec<libsql::Value>,
) -> Result<Vec<Record>, DatabaseError> {
    let mut rows = conn.query(sql, libsql::params_from_iter(params)).await?;
    let mut records = Vec::new();
    while let Some(row) = rows.next().await? {
        records.push(from_row(desc, &row)?);
    }
    Ok(records)
}

async fn insert_row(
    conn: &libsql::Connection,
    desc: &'static Descriptor,
    columns: Vec<(&'static Field, libsql::Value)>,
) -> Result<(), DatabaseError> {
    let names: Vec<&str> = columns.iter().map(|(f, _)| f.column).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        desc.table,
        names.join(", "),
        placeholders.join(", ")
    );
    let values = columns.into_iter().map(|(_, v)| v);
    conn.execute(&sql, libsql::params_from_iter(values)).await?;
    Ok(())
}

async fn update_row(
    conn: &libsql::Connection,
    desc: &'static Descriptor,
    id: &str,
    columns: Vec<(&'static Field, libsql::Value)>,
) -> Result<(), DatabaseError> {
    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    for (field, value) in columns {
        if field.column == ID.column {
            continue;
        }
        params.push(value);
        sets.push(format!("{} = ?{}", field.column, params.len()));
    }
    params.push(libsql::Value::Text(id.to_string()));
    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        desc.table,
        sets.join(", "),
        params.len()
    );
    conn.execute(&sql, libsql::params_from_iter(params)).await?;
    Ok(())
}
