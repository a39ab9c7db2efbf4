//! Competitor update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::entities::HiringProfile;
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompetitorPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub company_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub website: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub strengths: Option<Structured<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub weaknesses: Option<Structured<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::nullable"
    )]
    pub hiring_profile: Option<Option<Structured<HiringProfile>>>,
}

#[derive(Debug, Default)]
pub struct CompetitorPatchBuilder(CompetitorPatch);

impl CompetitorPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CompetitorPatch::default())
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
    pub fn website(mut self, val: Option<String>) -> Self {
        self.0.website = Some(val);
        self
    }

    #[must_use]
    pub fn strengths(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.strengths = Some(val.into());
        self
    }

    #[must_use]
    pub fn weaknesses(mut self, val: impl Into<Structured<Vec<String>>>) -> Self {
        self.0.weaknesses = Some(val.into());
        self
    }

    #[must_use]
    pub fn hiring_profile(mut self, val: Option<Structured<HiringProfile>>) -> Self {
        self.0.hiring_profile = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> CompetitorPatch {
        self.0
    }
}
