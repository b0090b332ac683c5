//! Three-way selection for enumerated request parameters
//!
//! A request parameter backed by a closed enum is either left unspecified,
//! set to a recognised value, or carries text that did not match any known
//! wire token (typically from configuration or user input).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A closed enum with a canonical wire token per variant
pub trait WireToken: Sized + Copy + 'static {
    /// Canonical token sent on the wire
    fn as_str(&self) -> &'static str;

    /// Resolve a wire token back to a variant
    fn from_token(token: &str) -> Option<Self>;
}

/// Enumerated parameter state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    /// Not set; the parameter is omitted
    #[default]
    Unspecified,
    /// A recognised value
    Valid(T),
    /// Text that matched no known token
    Invalid(String),
}

impl<T: WireToken> Selection<T> {
    /// Parse raw text into a selection
    ///
    /// Blank input is `Unspecified`, a known token is `Valid`, anything else
    /// is kept verbatim as `Invalid`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unspecified;
        }
        T::from_token(trimmed).map_or_else(|| Self::Invalid(raw.to_string()), Self::Valid)
    }

    /// Wire token for a valid selection
    #[must_use]
    pub fn wire_value(&self) -> Option<&'static str> {
        match self {
            Self::Valid(value) => Some(value.as_str()),
            Self::Unspecified | Self::Invalid(_) => None,
        }
    }

    /// The selected value, if valid
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Unspecified | Self::Invalid(_) => None,
        }
    }

    /// Check whether the selection is unspecified
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Check whether the selection holds unrecognised text
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

impl<T: WireToken> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => Ok(()),
            Self::Valid(value) => f.write_str(value.as_str()),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl<T: WireToken> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unspecified => serializer.serialize_none(),
            Self::Valid(value) => serializer.serialize_str(value.as_str()),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de, T: WireToken> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::Unspecified, |raw| Self::parse(&raw)))
    }
}
