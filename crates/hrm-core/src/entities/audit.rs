use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, EntityType};

/// An immutable audit log entry recording one mutation.
///
/// `changes` holds exactly the fields the caller supplied (the draft on
/// create, the patch on update, `{}` on delete), not a diff.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub entity_id: String,
    pub entity_type: EntityType,
    pub action: AuditAction,
    pub changes: serde_json::Value,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

/// Who performed a mutation. Optional on every mutating call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub user_id: String,
    pub user_name: Option<String>,
}

impl Actor {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: None,
        }
    }

    #[must_use]
    pub fn named(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}
