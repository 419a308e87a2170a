//! Forgiving decoders for API payloads.
//!
//! Monetary columns come back from the API as decimal strings ("1000.00")
//! or plain numbers depending on the endpoint. Read-side views treat
//! anything missing or malformed as zero instead of rejecting the payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert a JSON value into an amount. Non-numeric input yields `0.0`.
pub fn amount_from_value(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// `deserialize_with` helper for amount fields (number, string or null)
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(amount_from_value).unwrap_or(0.0))
}

/// Convert a JSON value into an integer key: a number or a numeric string.
/// Anything else yields `None`.
pub fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `deserialize_with` helper for foreign keys that may be absent, null or
/// sent as a string
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

/// `deserialize_with` helper mapping an explicit `null` to `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
