use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user or admin account as returned by every read path.
///
/// The password hash is deliberately absent: it never leaves the account
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an account. `password` is plaintext and is hashed
/// before it reaches storage.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}
