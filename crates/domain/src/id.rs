//! Typed identifier newtypes.
//!
//! The controller keys programs by string and zones by small integers, but
//! it is not strict about either: a program id may arrive as `"3"` or `3`.
//! Both identifiers accept either form on the way in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a [`Program`](crate::program::Program).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProgramId(String);

impl ProgramId {
    /// Wrap an existing key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is blank (the controller omitted it).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ordering key that sorts numeric ids numerically and the rest after them.
    #[must_use]
    pub fn sort_key(&self) -> (u8, u64, &str) {
        match self.0.parse::<u64>() {
            Ok(n) => (0, n, ""),
            Err(_) => (1, 0, self.0.as_str()),
        }
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProgramId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for ProgramId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<StringOrNumber> for ProgramId {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => Self(s),
            StringOrNumber::Unsigned(n) => Self(n.to_string()),
            StringOrNumber::Signed(n) => Self(n.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ProgramId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StringOrNumber::deserialize(deserializer).map(Self::from)
    }
}

/// Unique identifier for a [`Zone`](crate::zone::Zone), the controller's
/// zero-based valve index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZoneId(u32);

impl ZoneId {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for ZoneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Unsigned(n) => u32::try_from(n).map(Self).map_err(D::Error::custom),
            StringOrNumber::Signed(n) => u32::try_from(n).map(Self).map_err(D::Error::custom),
            StringOrNumber::String(s) => s.trim().parse().map(Self).map_err(D::Error::custom),
        }
    }
}
