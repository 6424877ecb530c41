//! Forgiving numeric deserializers for requirement and listing fields.
//!
//! Catalog fixtures and older clients send numbers as strings ("9000"), and
//! occasionally send garbage. Scoring treats anything it cannot read as a
//! missing value, so these helpers never fail: they map unreadable input to
//! `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional finite `f64` from a number or numeric string
pub fn f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_f64))
}

/// Deserialize an optional non-negative count from a number or numeric string
pub fn u32_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_u32))
}

pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

pub(crate) fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            // Accept 2.0 but not 2.5
            None => n
                .as_f64()
                .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
                .map(|v| v as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}
