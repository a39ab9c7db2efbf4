use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structured::Structured;

/// A recruiting KPI covering one period, with per-phase targets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: String,
    pub company_id: Option<String>,
    pub name: Option<String>,
    pub period_start: String,
    pub period_end: String,
    pub phase_data: Structured<Vec<PhaseTarget>>,
    pub notes: Option<String>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Target (and, once measured, actual) value for one selection phase.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTarget {
    pub phase_name: String,
    pub target_value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<i64>,
}

impl PhaseTarget {
    pub fn new(phase_name: impl Into<String>, target_value: i64) -> Self {
        Self {
            phase_name: phase_name.into(),
            target_value,
            actual_value: None,
        }
    }

    #[must_use]
    pub const fn with_actual(mut self, actual_value: i64) -> Self {
        self.actual_value = Some(actual_value);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KpiDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub period_start: String,
    pub period_end: String,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub phase_data: Structured<Vec<PhaseTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
