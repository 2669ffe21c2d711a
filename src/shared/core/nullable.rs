use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from an absent field in sparse payloads.
///
/// Use together with `#[serde(default)]`: absent -> `None`, `null` -> `Some(None)`,
/// a value -> `Some(Some(value))`.
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
