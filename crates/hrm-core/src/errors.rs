//! Cross-cutting error types.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates and converge as `anyhow::Error` in `hrm-cli`.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{} not found: {id}", entity_type.label())]
    NotFound { entity_type: EntityType, id: String },

    /// Caller-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored timestamp could not be parsed.
    #[error("Invalid timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },
}
