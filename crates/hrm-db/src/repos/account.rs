//! User and admin accounts.
//!
//! Kept off the generic repository: the password column is written only as a
//! salted hash, is never selected by a read path, and is redacted in audit
//! changes.

use hrm_core::entities::{Account, NewAccount};
use hrm_core::enums::{AccountKind, AuditAction};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::helpers::{entity_type_to_table, new_id, parse_timestamp, timestamp_after};
use crate::password::{hash_password, verify_password};
use crate::repos::audit::{self, NewAuditEntry};
use crate::service::HrmService;
use crate::updates::{AccountUpdate, REDACTED};

const ACCOUNT_COLUMNS: &str = "id, email, name, created_at, updated_at";

const fn table(kind: AccountKind) -> &'static str {
    entity_type_to_table(kind.entity_type())
}

fn row_to_account(row: &libsql::Row) -> Result<Account, DatabaseError> {
    Ok(Account {
        id: row.get::<String>(0)?,
        email: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        created_at: parse_timestamp(&row.get::<String>(3)?)?,
        updated_at: parse_timestamp(&row.get::<String>(4)?)?,
    })
}

async fn select_account(
    conn: &libsql::Connection,
    kind: AccountKind,
    column: &str,
    value: &str,
) -> Result<Option<Account>, DatabaseError> {
    let sql = format!(
        "SELECT {ACCOUNT_COLUMNS} FROM {} WHERE {column} = ?1",
        table(kind)
    );
    let mut rows = conn.query(&sql, [value]).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_account(&row)?)),
        None => Ok(None),
    }
}

impl HrmService {
    /// Create an account with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Credential` for an empty password, or
    /// `DatabaseError` if the email is already taken or the audit append fails.
    pub async fn create_account(
        &self,
        kind: AccountKind,
        input: &NewAccount,
    ) -> Result<Account, DatabaseError> {
        let password_hash = hash_password(&input.password)?;
        let id = new_id();
        let now = timestamp_after(None)?;

        let mut changes = Map::new();
        changes.insert("email".into(), Value::String(input.email.clone()));
        changes.insert("name".into(), Value::String(input.name.clone()));
        changes.insert("password".into(), Value::String(REDACTED.into()));
        let changes = Value::Object(changes);

        let tx = self.db().begin_write().await?;
        let result = async {
            tx.conn()
                .execute(
                    &format!(
                        "INSERT INTO {} (id, email, name, password_hash, created_at, updated_at)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                        table(kind)
                    ),
                    libsql::params![
                        id.as_str(),
                        input.email.as_str(),
                        input.name.as_str(),
                        password_hash.as_str(),
                        now.as_str(),
                        now.as_str()
                    ],
                )
                .await?;
            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: &id,
                    entity_type: kind.entity_type(),
                    action: AuditAction::Create,
                    changes: &changes,
                    timestamp: &now,
                    actor: self.actor(),
                },
            )
            .await?;
            select_account(tx.conn(), kind, "id", &id)
                .await?
                .ok_or(DatabaseError::NoResult)
        }
        .await;
        let account = tx.finish(result).await?;

        info!(%kind, id = %account.id, email = %account.email, "account created");
        Ok(account)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_account(
        &self,
        kind: AccountKind,
        id: &str,
    ) -> Result<Option<Account>, DatabaseError> {
        select_account(self.db().conn(), kind, "id", id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_account_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DatabaseError> {
        select_account(self.db().conn(), kind, "email", email).await
    }

    /// All accounts of one kind, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_accounts(&self, kind: AccountKind) -> Result<Vec<Account>, DatabaseError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM {} ORDER BY created_at DESC, rowid DESC",
            table(kind)
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next().await? {
            accounts.push(row_to_account(&row)?);
        }
        Ok(accounts)
    }

    /// Apply an account update. A new password is re-hashed with a fresh salt.
    ///
    /// Returns `None` if the account does not exist; nothing is audited then.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Credential` for an empty new password, or
    /// `DatabaseError` on constraint or audit failures.
    pub async fn update_account(
        &self,
        kind: AccountKind,
        id: &str,
        update: &AccountUpdate,
    ) -> Result<Option<Account>, DatabaseError> {
        let password_hash = update.password.as_deref().map(hash_password).transpose()?;
        let changes = update.audit_changes();

        let tx = self.db().begin_write().await?;
        let result = async {
            let Some(existing) = select_account(tx.conn(), kind, "id", id).await? else {
                return Ok(None);
            };
            let now = timestamp_after(Some(&hrm_core::timestamp::format(&existing.updated_at)))?;

            let mut sets = Vec::new();
            let mut params: Vec<libsql::Value> = Vec::new();
            if let Some(ref email) = update.email {
                params.push(email.as_str().into());
                sets.push(format!("email = ?{}", params.len()));
            }
            if let Some(ref name) = update.name {
                params.push(name.as_str().into());
                sets.push(format!("name = ?{}", params.len()));
            }
            if let Some(ref hash) = password_hash {
                params.push(hash.as_str().into());
                sets.push(format!("password_hash = ?{}", params.len()));
            }
            params.push(now.as_str().into());
            sets.push(format!("updated_at = ?{}", params.len()));
            params.push(id.into());
            let sql = format!(
                "UPDATE {} SET {} WHERE id = ?{}",
                table(kind),
                sets.join(", "),
                params.len()
            );
            tx.conn()
                .execute(&sql, libsql::params_from_iter(params))
                .await?;

            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: id,
                    entity_type: kind.entity_type(),
                    action: AuditAction::Update,
                    changes: &changes,
                    timestamp: &now,
                    actor: self.actor(),
                },
            )
            .await?;
            select_account(tx.conn(), kind, "id", id).await
        }
        .await;
        let account = tx.finish(result).await?;

        debug!(%kind, %id, found = account.is_some(), "account update");
        Ok(account)
    }

    /// Delete an account. Returns `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DELETE or the audit append fails.
    pub async fn delete_account(&self, kind: AccountKind, id: &str) -> Result<bool, DatabaseError> {
        let empty = Value::Object(Map::new());

        let tx = self.db().begin_write().await?;
        let result = async {
            let affected = tx
                .conn()
                .execute(&format!("DELETE FROM {} WHERE id = ?1", table(kind)), [id])
                .await?;
            if affected == 0 {
                return Ok(false);
            }
            let now = timestamp_after(None)?;
            audit::append(
                tx.conn(),
                &NewAuditEntry {
                    entity_id: id,
                    entity_type: kind.entity_type(),
                    action: AuditAction::Delete,
                    changes: &empty,
                    timestamp: &now,
                    actor: self.actor(),
                },
            )
            .await?;
            Ok::<_, DatabaseError>(true)
        }
        .await;
        let deleted = tx.finish(result).await?;

        debug!(%kind, %id, deleted, "account delete");
        Ok(deleted)
    }

    /// Check a login. Returns the account when `email` exists and `password`
    /// matches its stored hash, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn verify_login(
        &self,
        kind: AccountKind,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, DatabaseError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS}, password_hash FROM {} WHERE email = ?1",
            table(kind)
        );
        let mut rows = self.db().conn().query(&sql, [email]).await?;
        let Some(row) = rows.next().await? else {
            debug!(%kind, "login rejected: unknown email");
            return Ok(None);
        };
        let stored = row.get::<String>(5)?;
        if verify_password(password, &stored) {
            Ok(Some(row_to_account(&row)?))
        } else {
            debug!(%kind, "login rejected: password mismatch");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use hrm_core::entities::Actor;
    use hrm_core::enums::EntityType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::test_service;
    use crate::updates::AccountUpdateBuilder;

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            email: email.into(),
            name: "Aiko Tanaka".into(),
            password: "s3cret-pass".into(),
        }
    }

    async fn stored_hash(svc: &HrmService, kind: AccountKind, id: &str) -> String {
        let mut rows = svc
            .db()
            .conn()
            .query(
                &format!("SELECT password_hash FROM {} WHERE id = ?1", table(kind)),
                [id],
            )
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<String>(0).unwrap()
    }

    #[tokio::test]
    async fn create_hashes_password_and_verifies_login() {
        let svc = test_service().await;
        let account = svc
            .create_account(AccountKind::User, &new_account("aiko@example.com"))
            .await
            .unwrap();

        let hash = stored_hash(&svc, AccountKind::User, &account.id).await;
        assert!(!hash.contains("s3cret-pass"));
        assert!(hash.contains(':'));

        let ok = svc
            .verify_login(AccountKind::User, "aiko@example.com", "s3cret-pass")
            .await
            .unwrap();
        assert_eq!(ok, Some(account));
        assert!(
            svc.verify_login(AccountKind::User, "aiko@example.com", "wrong")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            svc.verify_login(AccountKind::User, "nobody@example.com", "s3cret-pass")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn users_and_admins_are_separate() {
        let svc = test_service().await;
        svc.create_account(AccountKind::Admin, &new_account("root@example.com"))
            .await
            .unwrap();
        assert!(svc.list_accounts(AccountKind::User).await.unwrap().is_empty());
        assert_eq!(svc.list_accounts(AccountKind::Admin).await.unwrap().len(), 1);
        assert!(
            svc.verify_login(AccountKind::User, "root@example.com", "s3cret-pass")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_audit() {
        let svc = test_service().await;
        svc.create_account(AccountKind::User, &new_account("dup@example.com"))
            .await
            .unwrap();
        let err = svc
            .create_account(AccountKind::User, &new_account("dup@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::LibSql(_)), "got {err:?}");
        assert_eq!(svc.query_audit(&AuditFilter::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let svc = test_service().await;
        let input = NewAccount {
            password: String::new(),
            ..new_account("x@example.com")
        };
        assert!(matches!(
            svc.create_account(AccountKind::User, &input).await,
            Err(DatabaseError::Credential(_))
        ));
        assert!(svc.list_accounts(AccountKind::User).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn audit_never_contains_password() {
        let svc = test_service().await.acting_as(Actor::new("admin-1"));
        let account = svc
            .create_account(AccountKind::User, &new_account("a@example.com"))
            .await
            .unwrap();
        let update = AccountUpdateBuilder::new().password("n3w-pass").build();
        svc.update_account(AccountKind::User, &account.id, &update)
            .await
            .unwrap();

        let history = svc.history_of(EntityType::User, &account.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].changes, json!({"password": REDACTED}));
        assert_eq!(
            history[1].changes,
            json!({"email": "a@example.com", "name": "Aiko Tanaka", "password": REDACTED})
        );
        assert!(history.iter().all(|e| e.user_id.as_deref() == Some("admin-1")));
        for entry in &history {
            let text = entry.changes.to_string();
            assert!(!text.contains("s3cret-pass") && !text.contains("n3w-pass"));
        }
    }

    #[tokio::test]
    async fn password_change_takes_effect() {
        let svc = test_service().await;
        let account = svc
            .create_account(AccountKind::Admin, &new_account("b@example.com"))
            .await
            .unwrap();
        let before = stored_hash(&svc, AccountKind::Admin, &account.id).await;

        let update = AccountUpdateBuilder::new()
            .password("n3w-pass")
            .name("B. Admin")
            .build();
        let updated = svc
            .update_account(AccountKind::Admin, &account.id, &update)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "B. Admin");
        assert!(updated.updated_at > account.updated_at);
        assert_ne!(stored_hash(&svc, AccountKind::Admin, &account.id).await, before);

        assert!(
            svc.verify_login(AccountKind::Admin, "b@example.com", "s3cret-pass")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            svc.verify_login(AccountKind::Admin, "b@example.com", "n3w-pass")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn missing_account_update_and_delete_are_silent() {
        let svc = test_service().await;
        let update = AccountUpdateBuilder::new().name("x").build();
        assert!(
            svc.update_account(AccountKind::User, "missing", &update)
                .await
                .unwrap()
                .is_none()
        );
        assert!(!svc.delete_account(AccountKind::User, "missing").await.unwrap());
        assert!(svc.query_audit(&AuditFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_lookup() {
        let svc = test_service().await;
        let account = svc
            .create_account(AccountKind::User, &new_account("c@example.com"))
            .await
            .unwrap();
        assert!(svc.delete_account(AccountKind::User, &account.id).await.unwrap());
        assert!(svc.get_account(AccountKind::User, &account.id).await.unwrap().is_none());
        assert!(
            svc.find_account_by_email(AccountKind::User, "c@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
