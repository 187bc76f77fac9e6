//! Display formatting for dates and labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Long form, e.g. `March 10, 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short US form, e.g. `3/10/2025`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Long form for an optional date, with a placeholder when absent.
pub fn long_date_or(date: Option<NaiveDate>, missing: &str) -> String {
    date.map_or_else(|| missing.to_owned(), long_date)
}

/// Today's date in the browser's (or server's) local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, or a full RFC 3339 timestamp read as a calendar day
/// in the local time zone. Timestamps without an offset keep their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() > 10 {
        if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(stamp.with_timezone(&chrono::Local).date_naive());
        }
    }
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Serde adapter for dates persisted either as `YYYY-MM-DD` or as a full
/// ISO-8601 timestamp. Empty or unparsable values become `None`.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Uppercase the first character, e.g. `female` -> `Female`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
