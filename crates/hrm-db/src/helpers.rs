//! Row parsing and naming helpers shared by the repositories.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use hrm_core::enums::EntityType;
use hrm_core::timestamp;

use crate::error::DatabaseError;

/// Generate a fresh record id (UUID v4, hyphenated, lowercase).
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Nanoseconds of the last timestamp handed out by [`monotonic_now`].
static LAST_ISSUED: AtomicI64 = AtomicI64::new(i64::MIN);

/// Wall-clock time, strictly after every earlier call in this process.
///
/// Two writes in the same clock tick still get distinct, ordered timestamps.
fn monotonic_now() -> DateTime<Utc> {
    let wall = timestamp::now();
    let Some(wall_nanos) = wall.timestamp_nanos_opt() else {
        return wall;
    };
    let next = |last: i64| wall_nanos.max(last.saturating_add(1));
    let previous = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        .unwrap_or_else(|last| last);
    DateTime::from_timestamp_nanos(next(previous))
}

/// Current time in the storage format, strictly after `previous` if given.
///
/// Keeps `updatedAt` strictly increasing across an update even when the
/// clock has not advanced since the previous write.
///
/// # Errors
///
/// Returns `DatabaseError::Core` if `previous` is not a parseable timestamp.
pub fn timestamp_after(previous: Option<&str>) -> Result<String, DatabaseError> {
    let now = monotonic_now();
    let Some(previous) = previous else {
        return Ok(timestamp::format(&now));
    };
    let prev: DateTime<Utc> = timestamp::parse(previous)?;
    if now > prev {
        Ok(timestamp::format(&now))
    } else {
        Ok(timestamp::format(&(prev + chrono::Duration::nanoseconds(1))))
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a required TEXT timestamp column.
///
/// # Errors
///
/// Returns `DatabaseError::Core` if the column holds an unparseable timestamp.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    Ok(timestamp::parse(s)?)
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Exhaustive match: adding a new `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Company => "companies",
        EntityType::Kpi => "kpis",
        EntityType::KpiSnapshot => "kpi_snapshots",
        EntityType::JobPosting => "job_postings",
        EntityType::Organization => "organizations",
        EntityType::Competitor => "competitors",
        EntityType::Faq => "faqs",
        EntityType::SelectionStep => "selection_steps",
        EntityType::User => "users",
        EntityType::Admin => "admins",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_uuid_v4() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(new_id(), id);
    }

    #[test]
    fn timestamp_after_is_strictly_greater() {
        let far_future = "2999-01-01T00:00:00.000000000Z";
        let next = timestamp_after(Some(far_future)).unwrap();
        assert_eq!(next, "2999-01-01T00:00:00.000000001Z");

        let past = "2000-01-01T00:00:00.000000000Z";
        assert!(timestamp_after(Some(past)).unwrap().as_str() > past);
    }

    #[test]
    fn fresh_timestamps_never_repeat() {
        let mut previous = timestamp_after(None).unwrap();
        for _ in 0..1000 {
            let next = timestamp_after(None).unwrap();
            assert!(next > previous, "{next} <= {previous}");
            previous = next;
        }
    }

    #[test]
    fn timestamp_after_rejects_garbage() {
        assert!(timestamp_after(Some("not a time")).is_err());
    }

    #[test]
    fn every_entity_type_has_a_distinct_table() {
        let mut tables: Vec<_> = EntityType::ALL
            .into_iter()
            .map(entity_type_to_table)
            .collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), EntityType::ALL.len());
    }
}
