//! Lenient date handling for record-store data
//!
//! Stores hand us dates as ISO strings, spreadsheet timestamps, or garbage.
//! Anything that does not parse is treated as an absent date; nothing here
//! ever returns an error for bad date input.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::constants::ISO_DATE_FORMAT;

const DATE_FORMATS: &[&str] = &[ISO_DATE_FORMAT, "%Y/%m/%d"];

// `%.f` also accepts a missing fractional part.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a date from free-form store text.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DD HH:MM:SS[.fff]`,
/// `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps. Returns `None` for
/// blank input or anything else.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use projboard_domain::parse_date_lenient;
///
/// assert_eq!(parse_date_lenient("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
/// assert_eq!(parse_date_lenient("NaT"), None);
/// ```
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
}

/// Format a date the way the stores persist it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Interpret an arbitrary JSON value as a date.
pub fn date_from_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => parse_date_lenient(text),
        _ => None,
    }
}

/// Serde adapter for `Option<NaiveDate>` fields fed by untrusted stores.
///
/// Deserialises any value, keeping only parseable date strings; writes
/// `YYYY-MM-DD` or `null`.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use super::{date_from_value, format_date};

    /// Serialise as an ISO date string or `null`.
    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialise leniently; unparseable input becomes `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(date_from_value))
    }
}

/// Serde adapter for string lists that may contain `null` or non-string
/// elements, or be missing or `null` entirely.
pub mod lenient_strings {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialise a list, dropping `null`s and stringifying numbers.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let items = match raw {
            Some(Value::Array(values)) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(text) => Some(text),
                    Value::Number(number) => Some(number.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(items)
    }
}
