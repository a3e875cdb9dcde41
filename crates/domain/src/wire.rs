//! Serde helpers for the controller's loosely written JSON files.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the type's default, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
