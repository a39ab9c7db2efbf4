//! Audit log repository.
//!
//! Append-only entries recording every mutation. Appends run on the
//! mutation's own transaction; the table itself refuses UPDATE and DELETE.

use hrm_core::entities::{Actor, AuditEntry};
use hrm_core::enums::{AuditAction, EntityType};
use tracing::debug;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, new_id, parse_timestamp};
use crate::service::HrmService;

/// Filter criteria for audit queries. Every field is optional.
#[derive(Debug, Default, Clone)]
pub struct AuditFilter {
    pub entity_id: Option<String>,
    pub entity_type: Option<EntityType>,
    pub action: Option<AuditAction>,
    /// No limit when `None`.
    pub limit: Option<u32>,
}

/// One audit entry about to be written.
#[derive(Debug)]
pub(crate) struct NewAuditEntry<'a> {
    pub entity_id: &'a str,
    pub entity_type: EntityType,
    pub action: AuditAction,
    pub changes: &'a serde_json::Value,
    pub timestamp: &'a str,
    pub actor: Option<&'a Actor>,
}

/// Append an audit entry on the given connection (normally a write
/// transaction). Returns the new entry id.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails.
pub(crate) async fn append(
    conn: &libsql::Connection,
    entry: &NewAuditEntry<'_>,
) -> Result<String, DatabaseError> {
    let id = new_id();
    let changes = serde_json::to_string(entry.changes)?;
    conn.execute(
        "INSERT INTO audit_log (id, entity_id, entity_type, action, changes, timestamp, user_id, user_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        libsql::params![
            id.as_str(),
            entry.entity_id,
            entry.entity_type.as_str(),
            entry.action.as_str(),
            changes,
            entry.timestamp,
            entry.actor.map(|a| a.user_id.as_str()),
            entry.actor.and_then(|a| a.user_name.as_deref())
        ],
    )
    .await?;
    debug!(
        audit_id = %id,
        entity_type = %entry.entity_type,
        entity_id = entry.entity_id,
        action = %entry.action,
        "audit entry appended"
    );
    Ok(id)
}

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    let changes = row.get::<String>(4)?;
    Ok(AuditEntry {
        id: row.get::<String>(0)?,
        entity_id: row.get::<String>(1)?,
        entity_type: row.get::<String>(2)?.parse()?,
        action: row.get::<String>(3)?.parse()?,
        changes: serde_json::from_str(&changes)?,
        timestamp: parse_timestamp(&row.get::<String>(5)?)?,
        user_id: get_opt_string(row, 6)?,
        user_name: get_opt_string(row, 7)?,
    })
}

impl HrmService {
    /// Query audit entries, newest first.
    ///
    /// Entries with the same timestamp come back in reverse insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored entry cannot be
    /// decoded.
    pub async fn query_audit(
        &self,
        filter: &AuditFilter,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref eid) = filter.entity_id {
            params.push(libsql::Value::Text(eid.clone()));
            conditions.push(format!("entity_id = ?{}", params.len()));
        }
        if let Some(et) = filter.entity_type {
            params.push(libsql::Value::Text(et.as_str().to_string()));
            conditions.push(format!("entity_type = ?{}", params.len()));
        }
        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit_clause = filter
            .limit
            .map(|limit| format!("LIMIT {limit}"))
            .unwrap_or_default();

        let sql = format!(
            "SELECT id, entity_id, entity_type, action, changes, timestamp, user_id, user_name
             FROM audit_log {where_clause}
             ORDER BY timestamp DESC, rowid DESC {limit_clause}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Every audit entry for one record, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn history_of(
        &self,
        entity_type: EntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        self.query_audit(&AuditFilter {
            entity_id: Some(entity_id.to_string()),
            entity_type: Some(entity_type),
            ..AuditFilter::default()
        })
        .await
    }
}
