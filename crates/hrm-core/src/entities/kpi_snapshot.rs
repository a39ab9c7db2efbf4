use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::PhaseTarget;
use crate::structured::Structured;

/// A point-in-time measurement of a KPI's phases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub id: String,
    pub kpi_id: String,
    pub snapshot_date: String,
    pub phase_data: Structured<Vec<PhaseTarget>>,
    pub achievement_rate: Option<f64>,
    pub comment: Option<String>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KpiSnapshotDraft {
    pub kpi_id: String,
    pub snapshot_date: String,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub phase_data: Structured<Vec<PhaseTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
