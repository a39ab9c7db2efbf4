//! Entity types, audit actions and account kinds.
//!
//! Entity types serialize with their logical (camelCase) names, which are the
//! values recorded in the audit log's `entity_type` column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Kind of mutation recorded by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(CoreError::Validation(format!("unknown audit action '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Logical category of business record. Each maps to exactly one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Company,
    Kpi,
    KpiSnapshot,
    JobPosting,
    Organization,
    Competitor,
    Faq,
    SelectionStep,
    User,
    Admin,
}

impl EntityType {
    /// Every entity type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Company,
        Self::Kpi,
        Self::KpiSnapshot,
        Self::JobPosting,
        Self::Organization,
        Self::Competitor,
        Self::Faq,
        Self::SelectionStep,
        Self::User,
        Self::Admin,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Kpi => "kpi",
            Self::KpiSnapshot => "kpiSnapshot",
            Self::JobPosting => "jobPosting",
            Self::Organization => "organization",
            Self::Competitor => "competitor",
            Self::Faq => "faq",
            Self::SelectionStep => "selectionStep",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label used in not-found messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Kpi => "KPI",
            Self::KpiSnapshot => "KPI snapshot",
            Self::JobPosting => "Job posting",
            Self::Organization => "Organization",
            Self::Competitor => "Competitor",
            Self::Faq => "FAQ",
            Self::SelectionStep => "Selection step",
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown entity type '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// AccountKind
// ---------------------------------------------------------------------------

/// Which credential-bearing table an account lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    User,
    Admin,
}

impl AccountKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// The entity type recorded in audit entries for this account kind.
    #[must_use]
    pub const fn entity_type(self) -> EntityType {
        match self {
            Self::User => EntityType::User,
            Self::Admin => EntityType::Admin,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
