//! Lenient parsing for backend `created_at` values.
//!
//! The backend stringifies its datetime column, which yields values such as
//! `2025-03-04 10:11:12.345678`. RFC 3339 strings are also accepted and are
//! normalised to UTC.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Raised when a timestamp matches none of the supported layouts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised timestamp: {value}")]
pub struct TimestampParseError {
    /// The rejected input.
    pub value: String,
}

/// Parses a backend timestamp.
///
/// # Errors
///
/// Returns [`TimestampParseError`] when `value` is neither RFC 3339 nor a
/// naive `YYYY-MM-DD HH:MM:SS[.ffffff]` timestamp.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampParseError> {
    let trimmed = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimestampParseError {
            value: value.to_owned(),
        })
}

/// Deserialises an optional timestamp, mapping anything unparseable to `None`.
pub(super) fn deserialize_lenient<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(raw) = value.as_str() else {
        return Ok(None);
    };
    match parse_timestamp(raw) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(error) => {
            tracing::debug!("ignoring history timestamp: {error}");
            Ok(None)
        }
    }
}
