//! Organization chart node update (patch) builder.

use serde::{Deserialize, Serialize};
use hrm_core::entities::OrgMember;
use hrm_core::structured::Structured;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrganizationPatch {
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
    pub parent_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub head_count: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::structured::strict::option"
    )]
    pub members: Option<Structured<Vec<OrgMember>>>,
}

#[derive(Debug, Default)]
pub struct OrganizationPatchBuilder(OrganizationPatch);

impl OrganizationPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(OrganizationPatch::default())
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
    pub fn parent_id(mut self, val: Option<String>) -> Self {
        self.0.parent_id = Some(val);
        self
    }

    #[must_use]
    pub fn head_count(mut self, val: Option<i64>) -> Self {
        self.0.head_count = Some(val);
        self
    }

    #[must_use]
    pub fn members(mut self, val: impl Into<Structured<Vec<OrgMember>>>) -> Self {
        self.0.members = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> OrganizationPatch {
        self.0
    }
}
