//! FAQ update (patch) builder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub company_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hrm_core::nullable::deserialize"
    )]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

#[derive(Debug, Default)]
pub struct FaqPatchBuilder(FaqPatch);

impl FaqPatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FaqPatch::default())
    }

    #[must_use]
    pub fn company_id(mut self, val: Option<String>) -> Self {
        self.0.company_id = Some(val);
        self
    }

    #[must_use]
    pub fn question(mut self, val: impl Into<String>) -> Self {
        self.0.question = Some(val.into());
        self
    }

    #[must_use]
    pub fn answer(mut self, val: impl Into<String>) -> Self {
        self.0.answer = Some(val.into());
        self
    }

    #[must_use]
    pub fn category(mut self, val: Option<String>) -> Self {
        self.0.category = Some(val);
        self
    }

    #[must_use]
    pub const fn display_order(mut self, val: i64) -> Self {
        self.0.display_order = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> FaqPatch {
        self.0
    }
}
