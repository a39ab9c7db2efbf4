use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::structured::Structured;

/// Competitor analysis entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    pub company_id: Option<String>,
    pub name: String,
    pub website: Option<String>,
    pub strengths: Structured<Vec<String>>,
    pub weaknesses: Structured<Vec<String>>,
    pub hiring_profile: Option<Structured<HiringProfile>>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    #[schemars(with = "String")]
    pub updated_at: DateTime<Utc>,
}

/// How a competitor hires: a nested object stored as one structured column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HiringProfile {
    pub average_salary: Option<i64>,
    pub open_positions: Option<i64>,
    #[serde(default)]
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompetitorDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub strengths: Structured<Vec<String>>,
    #[serde(default, deserialize_with = "crate::structured::strict::deserialize")]
    pub weaknesses: Structured<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::structured::strict::option"
    )]
    pub hiring_profile: Option<Structured<HiringProfile>>,
}
