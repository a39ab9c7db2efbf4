//! KPI snapshot update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::entities::PhaseTarget;
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KpiSnapshotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub phase_data: Option<Structured<Vec<PhaseTarget>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub achievement_rate: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub comment: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct KpiSnapshotPatchBuilder(KpiSnapshotPatch);

impl KpiSnapshotPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KpiSnapshotPatch::default())
    }

    #[must_use]
    pub fn kpi_id(mut self, val: impl Into<String>) -> Self {
        self.0.kpi_id = Some(val.into());
        self
    }

    #[must_use]
    pub fn snapshot_date(mut self, val: impl Into<String>) -> Self {
        self.0.snapshot_date = Some(val.into());
        self
    }

    #[must_use]
    pub fn phase_data(mut self, val: impl Into<Structured<Vec<PhaseTarget>>>) -> Self {
        self.0.phase_data = Some(val.into());
        self
    }

    #[must_use]
    pub fn achievement_rate(mut self, val: Option<f64>) -> Self {
        self.0.achievement_rate = Some(val);
        self
    }

    #[must_use]
    pub fn comment(mut self, val: Option<String>) -> Self {
        self.0.comment = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> KpiSnapshotPatch {
        self.0
    }
}
