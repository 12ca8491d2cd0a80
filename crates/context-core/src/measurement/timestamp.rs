//! Timestamp codec for persisted measurements.
//!
//! Written as RFC 3339 UTC with microseconds. Read leniently: RFC 3339 with
//! any offset, or a naive ISO date-time (taken as UTC) as older writers
//! produced. Anything else parses to `None` and callers treat it as age 0.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Encode a point in time the way the record log stores it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp. Returns `None` for missing or malformed input.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// A signed duration in fractional seconds, at microsecond resolution.
pub fn duration_seconds(d: Duration) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        // Beyond ±292k years microseconds overflow; milliseconds do not.
        None => d.num_milliseconds() as f64 / 1000.0,
    }
}

/// Seconds elapsed from `raw` until `now`, never negative.
/// Malformed or missing timestamps count as 0 seconds old.
pub fn seconds_since(raw: &str, now: DateTime<Utc>) -> f64 {
    match parse_timestamp(raw) {
        Some(at) => duration_seconds(now - at).max(0.0),
        None => 0.0,
    }
}
