//! Serde helper for patch fields that distinguish "absent" from "null".
//!
//! ```
//! # use serde::Deserialize;
//! #[derive(Deserialize)]
//! struct Patch {
//!     #[serde(default, deserialize_with = "hrm_core::nullable::deserialize")]
//!     notes: Option<Option<String>>,
//! }
//!
//! let absent: Patch = serde_json::from_str("{}").unwrap();
//! let cleared: Patch = serde_json::from_str(r#"{"notes":null}"#).unwrap();
//! assert_eq!(absent.notes, None);
//! assert_eq!(cleared.notes, Some(None));
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
///
/// # Errors
///
/// Propagates the inner type's deserialization error.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
