use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::confidence::Confidence;
use super::timestamp::{format_timestamp, parse_timestamp, seconds_since};
use crate::constants::UNKNOWN_OBSERVER;

/// One immutable statement in the record log: `subject predicate object`,
/// as seen by `observer` at `timestamp`.
///
/// A concept is identified by its string value alone; there is no separate
/// concept registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(default)]
    pub confidence: Confidence,
    /// Reference frame that produced the statement.
    #[serde(default = "unknown_observer")]
    pub observer: String,
    /// Kept as text so malformed historical values survive a round trip.
    /// `null` reads as empty; other non-string values keep their JSON text.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: String,
    /// Citations that allow confidence above the write-time ceiling.
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Attributes beyond the known schema, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unknown_observer() -> String {
    UNKNOWN_OBSERVER.to_string()
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

impl Measurement {
    /// Build a measurement stamped at `at` with no evidence.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
        confidence: f64,
        observer: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            confidence: Confidence::new(confidence),
            observer: observer.into(),
            timestamp: format_timestamp(at),
            evidence: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Attach evidence citations.
    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Confidence as a raw f64.
    pub fn confidence(&self) -> f64 {
        self.confidence.value()
    }

    /// Parsed timestamp, or `None` if it is missing or malformed.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    /// Seconds since this measurement was taken (0 for malformed timestamps).
    pub fn age_seconds(&self, now: DateTime<Utc>) -> f64 {
        seconds_since(&self.timestamp, now)
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}
