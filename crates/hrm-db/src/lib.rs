//! # hrm-db
//!
//! libSQL record store for the HR backend.
//!
//! Holds the 8 record tables, the user/admin account tables and the
//! append-only audit log. Records are translated between their external
//! camelCase shape and snake_case columns by [`mapper`], driven by the static
//! field tables in [`schema`]. A single generic [`repos::Repository`] serves
//! every record type; each mutation and its audit entry commit together.
//!
//! Uses the `libsql` crate: a local file or `:memory:` database by default,
//! or a remote libSQL server when configured.

pub mod error;
pub mod helpers;
pub mod mapper;
mod migrations;
pub mod password;
pub mod repos;
pub mod schema;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use hrm_config::DatabaseConfig;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Central database handle.
///
/// Wraps a libSQL database, one connection and the write gate. Writers take
/// the gate for the span of one transaction, so two mutations never
/// interleave their statements on the shared connection.
pub struct HrmDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    write_gate: Mutex<()>,
}

impl HrmDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hrm_db = Self::from_parts(db, conn);
        hrm_db.run_migrations().await?;
        info!(path, "opened local database");
        Ok(hrm_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let hrm_db = Self::from_parts(db, conn);
        hrm_db.run_migrations().await?;
        info!(url, "opened remote database");
        Ok(hrm_db)
    }

    /// Open whichever database the configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configuration is inconsistent or the
    /// database cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    fn from_parts(db: libsql::Database, conn: libsql::Connection) -> Self {
        Self {
            db,
            conn,
            write_gate: Mutex::new(()),
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Take the write gate and begin a transaction.
    pub(crate) async fn begin_write(&self) -> Result<WriteTx<'_>, DatabaseError> {
        let gate = self.write_gate.lock().await;
        let tx = self.conn.transaction().await?;
        Ok(WriteTx { tx, _gate: gate })
    }
}

/// An open write transaction holding the write gate.
///
/// Every writer ends it through [`WriteTx::finish`].
pub(crate) struct WriteTx<'a> {
    tx: libsql::Transaction,
    _gate: MutexGuard<'a, ()>,
}

impl WriteTx<'_> {
    pub(crate) fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// Commit on `Ok`, roll back on `Err`, and hand the result through.
    pub(crate) async fn finish<T>(
        self,
        result: Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.tx.commit().await?;
                debug!("write committed");
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback) = self.tx.rollback().await {
                    warn!(%error, %rollback, "rollback failed after write error");
                } else {
                    warn!(%error, "write rolled back");
                }
                Err(error)
            }
        }
    }
}
