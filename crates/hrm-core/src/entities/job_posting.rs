use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structured::Structured;

/// An open (or drafted) position.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub company_id: Option<String>,
    pub title: String,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub requirements: Structured<Vec<String>>,
    pub benefits: Structured<Vec<String>>,
    pub is_published: bool,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPostingDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub requirements: Structured<Vec<String>>,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub benefits: Structured<Vec<String>>,
    #[serde(default)]
    pub is_published: bool,
}
