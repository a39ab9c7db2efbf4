//! Job posting update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPostingPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub company_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub department: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub employment_type: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub salary_min: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub salary_max: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub requirements: Option<Structured<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub benefits: Option<Structured<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Default)]
pub struct JobPostingPatchBuilder(JobPostingPatch);

impl JobPostingPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(JobPostingPatch::default())
    }

    #[must_use]
    pub fn company_id(mut self, val: Option<String>) -> Self {
        self.0.company_id = Some(val);
        self
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn department(mut self, val: Option<String>) -> Self {
        self.0.department = Some(val);
        self
    }

    #[must_use]
    pub fn employment_type(mut self, val: Option<String>) -> Self {
        self.0.employment_type = Some(val);
        self
    }

    #[must_use]
    pub fn location(mut self, val: Option<String>) -> Self {
        self.0.location = Some(val);
        self
    }

    #[must_use]
    pub fn salary_min(mut self, val: Option<i64>) -> Self {
        self.0.salary_min = Some(val);
        self
    }

    #[must_use]
    pub fn salary_max(mut self, val: Option<i64>) -> Self {
        self.0.salary_max = Some(val);
        self
    }

    #[must_use]
    pub fn requirements(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.requirements = Some(val.into());
        self
    }

    #[must_use]
    pub fn benefits(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.benefits = Some(val.into());
        self
    }

    #[must_use]
    pub const fn is_published(mut self, val: bool) -> Self {
        self.0.is_published = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> JobPostingPatch {
        self.0
    }
}
