use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CONFIDENCE_CEILING, DEFAULT_CONFIDENCE, MAX_CONFIDENCE};

/// Confidence score clamped to [0.0, 1.0].
/// Represents how strongly an observer stands behind a measurement.
/// Persisted values outside the range are clamped on read.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

/// What the write-time ceiling did to a requested confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CeilingDecision {
    /// Requested value was at or below the ceiling.
    WithinCeiling,
    /// Requested value exceeded the ceiling without evidence and was lowered.
    Capped { requested: f64 },
    /// Requested value exceeded the ceiling and evidence allowed it (up to 1.0).
    AcceptedWithEvidence { citations: usize },
}

impl Confidence {
    /// Magnitudes above this read as high confidence.
    pub const HIGH: f64 = 0.7;
    /// Magnitudes above this (and not high) read as moderate confidence.
    pub const MODERATE: f64 = 0.4;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, MAX_CONFIDENCE))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Apply the write-time ceiling to a requested confidence.
    ///
    /// Above `ceiling` the value is lowered to `ceiling` unless at least one
    /// evidence citation is supplied, in which case anything up to 1.0 is kept.
    pub fn admit(requested: f64, citations: usize, ceiling: f64) -> (Self, CeilingDecision) {
        if requested > ceiling {
            if citations == 0 {
                return (Self::new(ceiling), CeilingDecision::Capped { requested });
            }
            return (
                Self::new(requested),
                CeilingDecision::AcceptedWithEvidence { citations },
            );
        }
        (Self::new(requested), CeilingDecision::WithinCeiling)
    }

    /// [`Confidence::admit`] with the default 0.7 ceiling.
    pub fn admit_default(requested: f64, citations: usize) -> (Self, CeilingDecision) {
        Self::admit(requested, citations, CONFIDENCE_CEILING)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
