use serde::{Deserialize, Serialize};

use super::stage::{Stage, StageThresholds};

/// Comparison of an expected magnitude against what the log currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchReport {
    pub subject: String,
    pub expected_magnitude: f64,
    pub measured_magnitude: f64,
    /// `|expected - measured|`.
    pub magnitude_delta: f64,
    pub phase: Option<f64>,
    pub timescale_seconds: f64,
    /// Delta decayed by elapsed phase.
    pub interference: f64,
    pub stage: Stage,
    pub thresholds: StageThresholds,
}
