//! Calendar helpers shared by the projector and the loaders
//!
//! All day arithmetic works on `NaiveDate`, so time of day never skews a
//! day count. Timestamps are truncated to midnight before they get here.

use crate::error::{LedgerError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Truncate a timestamp to its calendar date (midnight)
pub fn normalize_to_midnight(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(value.to_string()))
}

/// Parse a creation timestamp
///
/// Accepts a bare date (midnight), `YYYY-MM-DD HH:MM:SS`, the `T`-separated
/// form, and RFC 3339 with an offset (kept in the offset's local time).
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    // Bare date = midnight
    parse_date(value)
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| LedgerError::InvalidDate(value.to_string()))
}

/// Serde adapter for optional timestamps, accepting every form `parse_timestamp` does
///
/// `null`, a missing field and an empty string all mean `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
