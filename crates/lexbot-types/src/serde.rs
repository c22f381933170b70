//! Serde helpers shared by request bodies.

use serde::{Deserialize, de};

/// Deserialize `null` as the type's zero value.
///
/// Pair with `#[serde(default)]` so an absent field and an explicit `null`
/// bind the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: de::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
