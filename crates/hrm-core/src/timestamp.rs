//! Sortable textual timestamps.
//!
//! Stored timestamps are fixed-width RFC 3339 in UTC with nanosecond
//! precision and a `Z` suffix (`2024-01-01T09:30:00.000000000Z`), so lexical
//! order in `ORDER BY created_at` equals chronological order.
//!
//! Use as a serde adapter: `#[serde(with = "hrm_core::timestamp")]`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::CoreError;

/// Current UTC time. Nanosecond precision survives a format/parse round trip.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp in the storage representation.
#[must_use]
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (any precision) and `SQLite`'s `datetime('now')` format
/// (`"2026-02-09 14:30:00"`), which rows inserted by hand may carry.
///
/// # Errors
///
/// Returns `CoreError::Timestamp` if the string matches neither format.
pub fn parse(s: &str) -> Result<DateTime<Utc>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| CoreError::Timestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Serde serializer half of the adapter.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(dt))
}

/// Serde deserializer half of the adapter.
///
/// # Errors
///
/// Fails if the value is not a string in a supported timestamp format.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}
