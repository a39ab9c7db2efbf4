//! Selection step update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectionStepPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub company_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_order: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub evaluation_criteria: Option<Structured<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub duration_minutes: Option<Option<i64>>,
}

#[derive(Debug, Default)]
pub struct SelectionStepPatchBuilder(SelectionStepPatch);

impl SelectionStepPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SelectionStepPatch::default())
    }

    #[must_use]
    pub fn company_id(mut self, val: Option<String>) -> Self {
        self.0.company_id = Some(val);
        self
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn step_order(mut self, val: i64) -> Self {
        self.0.step_order = Some(val);
        self
    }

    #[must_use]
    pub fn description(mut self, val: Option<String>) -> Self {
        self.0.description = Some(val);
        self
    }

    #[must_use]
    pub fn evaluation_criteria(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.evaluation_criteria = Some(val.into());
        self
    }

    #[must_use]
    pub fn duration_minutes(mut self, val: Option<i64>) -> Self {
        self.0.duration_minutes = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> SelectionStepPatch {
        self.0
    }
}
