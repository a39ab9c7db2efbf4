//! KPI update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::entities::PhaseTarget;
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KpiPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub company_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
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
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct KpiPatchBuilder(KpiPatch);

impl KpiPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KpiPatch::default())
    }

    #[must_use]
    pub fn company_id(mut self, val: Option<String>) -> Self {
        self.0.company_id = Some(val);
        self
    }

    #[must_use]
    pub fn name(mut self, val: Option<String>) -> Self {
        self.0.name = Some(val);
        self
    }

    #[must_use]
    pub fn period_start(mut self, val: impl Into<String>) -> Self {
        self.0.period_start = Some(val.into());
        self
    }

    #[must_use]
    pub fn period_end(mut self, val: impl Into<String>) -> Self {
        self.0.period_end = Some(val.into());
        self
    }

    #[must_use]
    pub fn phase_data(mut self, val: impl Into<Structured<Vec<PhaseTarget>>>) -> Self {
        self.0.phase_data = Some(val.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, val: Option<String>) -> Self {
        self.0.notes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> KpiPatch {
        self.0
    }
}
