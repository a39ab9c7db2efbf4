//! Record store (libSQL / Turso) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default local database file.
fn default_path() -> String {
    "hrm.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:` for a throwaway store.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://hrm-acme.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the remote edge database should be used instead of the local file.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check the section is usable.
    ///
    /// A URL without a token (or the reverse) is almost certainly a
    /// half-finished setup, so it is rejected rather than silently falling
    /// back to the local file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() != self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url / database.auth_token".into(),
                reason: "both must be set for remote access".into(),
            });
        }
        if !self.is_remote() && self.path.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        if self.is_remote() && !self.url.starts_with("libsql://") && !self.url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: format!("expected libsql:// or https:// URL, got '{}'", self.url),
            });
        }
        Ok(())
    }
}
