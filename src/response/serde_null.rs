//! Field adapter for metadata the service may send as an explicit `null`.
//!
//! `#[serde(default)]` only covers missing keys; this maps a present `null`
//! to the same zero value.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
