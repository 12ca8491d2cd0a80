//! The measurement record and its value types.

pub mod base;
pub mod confidence;
pub mod timestamp;

pub use base::Measurement;
pub use confidence::{CeilingDecision, Confidence};
pub use timestamp::{duration_seconds, format_timestamp, parse_timestamp, seconds_since};
