//! Account update builder.
//!
//! Not serializable on purpose: the audit payload is built by
//! [`AccountUpdate::audit_changes`], which never includes the password.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Marker recorded in audit changes in place of a new password.
pub const REDACTED: &str = "[redacted]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// New plaintext password; hashed before storage.
    #[serde(default)]
    pub password: Option<String>,
}

impl AccountUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none()
    }

    /// Caller-supplied fields for the audit log, password redacted.
    #[must_use]
    pub fn audit_changes(&self) -> Value {
        let mut changes = Map::new();
        if let Some(email) = &self.email {
            changes.insert("email".into(), Value::String(email.clone()));
        }
        if let Some(name) = &self.name {
            changes.insert("name".into(), Value::String(name.clone()));
        }
        if self.password.is_some() {
            changes.insert("password".into(), Value::String(REDACTED.into()));
        }
        Value::Object(changes)
    }
}

#[derive(Debug, Default)]
pub struct AccountUpdateBuilder(AccountUpdate);

impl AccountUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AccountUpdate::default())
    }

    #[must_use]
    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.0.email = Some(val.into());
        self
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn password(mut self, val: impl Into<String>) -> Self {
        self.0.password = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> AccountUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_changes_redact_password() {
        let update = AccountUpdateBuilder::new()
            .name("New Name")
            .password("hunter2")
            .build();
        let changes = update.audit_changes();
        assert_eq!(changes["name"], "New Name");
        assert_eq!(changes["password"], REDACTED);
        assert!(!changes.to_string().contains("hunter2"));
    }

    #[test]
    fn empty_update() {
        assert!(AccountUpdate::default().is_empty());
        assert!(!AccountUpdateBuilder::new().email("a@b.c").build().is_empty());
    }
}
