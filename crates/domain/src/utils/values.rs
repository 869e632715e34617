//! Lenient scalar handling for record-store data
//!
//! Spreadsheet exports write whole numbers as `2024.0` or `"3"` and put
//! numbers where text belongs. These adapters coerce what they can and fall
//! back to the field's empty value instead of rejecting the record.

use serde_json::Value;

/// Interpret a JSON value as a whole number of type `T`.
///
/// Accepts integers, integral floats and numeric strings (`"3"`, `" 3.0 "`).
/// Fractions, out-of-range values and anything else yield `None`.
pub fn number_from_value<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    let whole = match value {
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().and_then(whole_f64)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_f64))
        }
        _ => None,
    }?;
    T::try_from(whole).ok()
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_f64(value: f64) -> Option<i64> {
    let in_range = value.is_finite() && value.abs() < 9.0e15;
    (in_range && value.fract() == 0.0).then(|| value as i64)
}

/// Serde adapter for whole-number fields.
///
/// Unusable input becomes `T::default()`, which record validation rejects
/// on the next write.
pub mod lenient_number {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::number_from_value;

    /// Deserialise leniently; see [`number_from_value`].
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64> + Default,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(number_from_value).unwrap_or_default())
    }
}

/// Serde adapter for free-text fields.
///
/// Strings are kept, numbers are stringified, anything else is empty.
pub mod lenient_text {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialise a text field, defaulting to empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(text)) => text,
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        };
        Ok(text)
    }
}

/// Serde adapter for optional text: only strings survive.
pub mod lenient_optional_text {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialise optional text; non-strings become `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(text)) => Ok(Some(text)),
            _ => Ok(None),
        }
    }
}
