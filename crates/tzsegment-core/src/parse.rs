//! Timestamp normalization.
//!
//! Timestamps reach the classifier in several shapes: epoch seconds, epoch
//! milliseconds, ISO-8601 strings, or an already-parsed [`DateTime<Utc>`].
//! [`TimestampValue`] is the loosely typed carrier for all of them and
//! [`TimestampValue::normalize`] turns any of them into one absolute instant.
//!
//! Bare numbers use a magnitude heuristic: anything above
//! [`EPOCH_MS_THRESHOLD`] is milliseconds, everything else is seconds. Second
//! values past the threshold (roughly the year 33658) are read as
//! milliseconds. Callers that know the unit should use
//! [`TimestampValue::EpochSeconds`] or [`TimestampValue::EpochMillis`].
//!
//! Strings without a UTC offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::str::FromStr;

use crate::error::{Result, TzSegmentError};

/// Numbers with a larger magnitude are epoch milliseconds.
pub const EPOCH_MS_THRESHOLD: f64 = 1e12;

/// Offset-bearing forms RFC3339 rejects: minute precision and basic `+HHMM`.
const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A timestamp in any of the accepted source representations.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampValue {
    /// Epoch seconds or milliseconds, decided by magnitude.
    Number(f64),
    /// Epoch seconds, no heuristic.
    EpochSeconds(i64),
    /// Epoch milliseconds, no heuristic.
    EpochMillis(i64),
    /// ISO-8601 text.
    Text(String),
    /// An already resolved instant.
    DateTime(DateTime<Utc>),
    /// Anything else (null, bool, arrays, objects).
    Unsupported,
}

impl TimestampValue {
    /// Resolve to an absolute instant, or `None` if the value cannot be read.
    pub fn normalize(&self) -> Option<DateTime<Utc>> {
        match self {
            TimestampValue::Number(value) => from_heuristic_number(*value),
            TimestampValue::EpochSeconds(s) => Utc.timestamp_opt(*s, 0).single(),
            TimestampValue::EpochMillis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            TimestampValue::Text(text) => parse_iso8601(text).ok(),
            TimestampValue::DateTime(dt) => Some(*dt),
            TimestampValue::Unsupported => None,
        }
    }
}

fn from_heuristic_number(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() > EPOCH_MS_THRESHOLD {
        value
    } else {
        value * 1000.0
    };
    // Out-of-range floats saturate on the cast and are rejected by chrono.
    Utc.timestamp_millis_opt(millis.trunc() as i64).single()
}

impl From<f64> for TimestampValue {
    fn from(value: f64) -> Self {
        TimestampValue::Number(value)
    }
}

impl From<i64> for TimestampValue {
    fn from(value: i64) -> Self {
        TimestampValue::Number(value as f64)
    }
}

impl From<&str> for TimestampValue {
    fn from(value: &str) -> Self {
        TimestampValue::Text(value.to_string())
    }
}

impl From<String> for TimestampValue {
    fn from(value: String) -> Self {
        TimestampValue::Text(value)
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(value: DateTime<Utc>) -> Self {
        TimestampValue::DateTime(value)
    }
}

impl From<&serde_json::Value> for TimestampValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(TimestampValue::Number)
                .unwrap_or(TimestampValue::Unsupported),
            serde_json::Value::String(s) => TimestampValue::Text(s.clone()),
            _ => TimestampValue::Unsupported,
        }
    }
}

/// Supported timestamp formats for strict string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// Numbers by magnitude, anything else as ISO-8601.
    #[default]
    Auto,
    /// Unix epoch milliseconds (e.g., "1696345200000")
    EpochMs,
    /// Unix epoch seconds (e.g., "1696345200")
    EpochS,
    /// ISO-8601 (e.g., "2023-10-03T15:00:00Z", "2023-10-03T15:00:00")
    Iso8601,
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampFormat::Auto => write!(f, "auto"),
            TimestampFormat::EpochMs => write!(f, "epoch_ms"),
            TimestampFormat::EpochS => write!(f, "epoch_s"),
            TimestampFormat::Iso8601 => write!(f, "iso8601"),
        }
    }
}

impl FromStr for TimestampFormat {
    type Err = TzSegmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(TimestampFormat::Auto),
            "epoch_ms" => Ok(TimestampFormat::EpochMs),
            "epoch_s" => Ok(TimestampFormat::EpochS),
            "iso8601" | "rfc3339" => Ok(TimestampFormat::Iso8601),
            _ => Err(TzSegmentError::ParseError(format!(
                "Unknown format: '{}'. Expected 'auto', 'epoch_ms', 'epoch_s', or 'iso8601'",
                s
            ))),
        }
    }
}

/// Parse a timestamp string according to the specified format.
///
/// # Examples
///
/// ```
/// use tzsegment_core::parse::{parse_timestamp, TimestampFormat};
/// use chrono::{TimeZone, Utc};
///
/// let dt = parse_timestamp("1696345200", TimestampFormat::Auto).unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2023, 10, 3, 15, 0, 0).unwrap());
///
/// let dt = parse_timestamp("2023-10-03T15:00:00Z", TimestampFormat::Iso8601).unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2023, 10, 3, 15, 0, 0).unwrap());
/// ```
pub fn parse_timestamp(input: &str, format: TimestampFormat) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    match format {
        TimestampFormat::Auto => parse_auto(trimmed),
        TimestampFormat::EpochMs => parse_epoch_ms(trimmed),
        TimestampFormat::EpochS => parse_epoch_s(trimmed),
        TimestampFormat::Iso8601 => parse_iso8601(trimmed),
    }
}

/// Turn a raw input line into a [`TimestampValue`] without resolving it.
pub fn timestamp_value(input: &str, format: TimestampFormat) -> Result<TimestampValue> {
    let trimmed = input.trim();

    match format {
        TimestampFormat::Auto => Ok(match trimmed.parse::<f64>() {
            Ok(num) => TimestampValue::Number(num),
            Err(_) => TimestampValue::Text(trimmed.to_string()),
        }),
        TimestampFormat::EpochMs => {
            parse_integer(trimmed, "milliseconds").map(TimestampValue::EpochMillis)
        }
        TimestampFormat::EpochS => {
            parse_integer(trimmed, "seconds").map(TimestampValue::EpochSeconds)
        }
        TimestampFormat::Iso8601 => Ok(TimestampValue::Text(trimmed.to_string())),
    }
}

fn parse_auto(input: &str) -> Result<DateTime<Utc>> {
    let value = timestamp_value(input, TimestampFormat::Auto)?;
    match value {
        TimestampValue::Text(text) => parse_iso8601(&text),
        other => other.normalize().ok_or_else(|| {
            TzSegmentError::ParseError(format!("Epoch value out of range: '{}'", input))
        }),
    }
}

fn parse_integer(input: &str, unit: &str) -> Result<i64> {
    input.parse().map_err(|_| {
        TzSegmentError::ParseError(format!(
            "Invalid epoch {}: '{}'. Expected integer value.",
            unit, input
        ))
    })
}

/// Parse epoch milliseconds.
fn parse_epoch_ms(input: &str) -> Result<DateTime<Utc>> {
    let ms = parse_integer(input, "milliseconds")?;
    Utc.timestamp_millis_opt(ms).single().ok_or_else(|| {
        TzSegmentError::ParseError(format!("Epoch milliseconds out of range: {}", ms))
    })
}

/// Parse epoch seconds.
fn parse_epoch_s(input: &str) -> Result<DateTime<Utc>> {
    let s = parse_integer(input, "seconds")?;
    Utc.timestamp_opt(s, 0)
        .single()
        .ok_or_else(|| TzSegmentError::ParseError(format!("Epoch seconds out of range: {}", s)))
}

/// Parse an ISO-8601 timestamp.
///
/// Supports:
/// - `2023-10-03T15:00:00Z` and `2023-10-03T12:00:00-03:00`
/// - `2023-10-03T15:00:00` and `2023-10-03 15:00` (read as UTC)
/// - `2023-10-03` (UTC midnight)
pub fn parse_iso8601(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    // A trailing designator is spelled as an explicit zero offset
    let zoned = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => input.to_string(),
    };
    for fmt in &OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for fmt in &NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(TzSegmentError::ParseError(format!(
        "Invalid ISO-8601 timestamp: '{}'",
        input
    )))
}
