//! Company update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub industry: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub employee_count: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub locations: Option<Structured<Vec<String>>>,
}

#[derive(Debug, Default)]
pub struct CompanyPatchBuilder(CompanyPatch);

impl CompanyPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CompanyPatch::default())
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn industry(mut self, val: Option<String>) -> Self {
        self.0.industry = Some(val);
        self
    }

    #[must_use]
    pub fn employee_count(mut self, val: Option<i64>) -> Self {
        self.0.employee_count = Some(val);
        self
    }

    #[must_use]
    pub fn locations(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.locations = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CompanyPatch {
        self.0
    }
}
