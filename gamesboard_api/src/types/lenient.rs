//! Deserializers for the API's loosely typed scalars.
//!
//! The leaderboard endpoint mixes strings and numbers for the same field
//! across years (`"age": "28"` vs `"age": 28`). Scalars are kept as text and
//! typed later by the table layer.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// Optional scalar: string, number, bool or null. Arrays and objects are rejected.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected a scalar, got {}", other))),
    }
}

/// Required scalar identifier: a non-empty string or a number.
pub(crate) fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a non-empty string or number, got {}",
            other
        ))),
    }
}
