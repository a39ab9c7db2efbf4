//! Structured (array / nested object) field values.
//!
//! Structured fields are stored as JSON text. A stored value that no longer
//! parses, or parses into the wrong shape, is not an error: it comes back as
//! [`Structured::Raw`] carrying the stored text, and writes it back unchanged
//! if the record is saved again.
//!
//! Caller input is held to a stricter rule. Drafts and patches route their
//! structured fields through [`strict`], which only accepts the native shape.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A structured field value: either its native shape or the raw stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Structured<T> {
    Parsed(T),
    Raw(String),
}

impl<T> Structured<T> {
    /// The parsed value, or `None` if the stored text could not be decoded.
    #[must_use]
    pub const fn parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl<T: Default> Default for Structured<T> {
    fn default() -> Self {
        Self::Parsed(T::default())
    }
}

impl<T> From<T> for Structured<T> {
    fn from(value: T) -> Self {
        Self::Parsed(value)
    }
}

/// Never fails: anything that is not a valid `T` becomes `Raw`.
impl<'de, T: DeserializeOwned> Deserialize<'de> for Structured<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if let Ok(parsed) = T::deserialize(&value) {
            return Ok(Self::Parsed(parsed));
        }
        Ok(match value {
            Value::String(text) => Self::Raw(text),
            other => Self::Raw(other.to_string()),
        })
    }
}

/// Serde helpers for caller-supplied structured fields.
///
/// ```
/// # use serde::Deserialize;
/// # use hrm_core::structured::Structured;
/// #[derive(Deserialize)]
/// struct Draft {
///     #[serde(default, deserialize_with = "hrm_core::structured::strict::deserialize")]
///     tags: Structured<Vec<String>>,
/// }
///
/// assert!(serde_json::from_str::<Draft>(r#"{"tags":["a"]}"#).is_ok());
/// assert!(serde_json::from_str::<Draft>(r#"{"tags":"[\"a\"]"}"#).is_err());
/// ```
pub mod strict {
    use serde::{Deserialize, Deserializer};

    use super::Structured;

    /// Accept only the native shape of `T`.
    ///
    /// # Errors
    ///
    /// Propagates `T`'s deserialization error, so a JSON string or a
    /// wrong-shape object is rejected instead of becoming `Raw`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Structured<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Structured::Parsed)
    }

    /// [`deserialize`] for an optional field; `null` stays `None`.
    ///
    /// Pair with `#[serde(default)]` so an absent key stays `None`.
    ///
    /// # Errors
    ///
    /// Propagates `T`'s deserialization error.
    pub fn option<'de, T, D>(deserializer: D) -> Result<Option<Structured<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map(Structured::Parsed))
    }

    /// [`deserialize`] for a patch field that distinguishes "absent" from
    /// "null", like [`crate::nullable::deserialize`].
    ///
    /// # Errors
    ///
    /// Propagates `T`'s deserialization error.
    pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<Structured<T>>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        option(deserializer).map(Some)
    }
}
