use std::fmt;

use serde::{Deserialize, Serialize};

/// Systematic lean of an observer relative to a reference observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    Overconfident,
    Underconfident,
    Calibrated,
}

impl BiasType {
    /// Classify a mean confidence delta against a symmetric margin.
    pub fn classify(average_delta: f64, margin: f64) -> Self {
        if average_delta > margin {
            BiasType::Overconfident
        } else if average_delta < -margin {
            BiasType::Underconfident
        } else {
            BiasType::Calibrated
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BiasType::Overconfident => "overconfident",
            BiasType::Underconfident => "underconfident",
            BiasType::Calibrated => "calibrated",
        })
    }
}

/// Bias of `observer` measured against `reference` over their shared subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub observer: String,
    pub reference: String,
    pub bias_type: BiasType,
    /// Mean of `reference - observer` confidence over every shared object.
    pub average_confidence_delta: f64,
    pub shared_subjects: Vec<String>,
    /// Subjects only `observer` recorded.
    pub only_observer: Vec<String>,
    /// Subjects only `reference` recorded.
    pub blind_spots: Vec<String>,
    /// Number of deltas averaged.
    pub sample_size: usize,
}

/// Too few shared subjects to say anything about bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    pub observer: String,
    pub reference: String,
    pub required: usize,
    pub available: usize,
    pub message: String,
}

/// Outcome of bias detection. Insufficient data is a result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BiasAssessment {
    Assessed(BiasReport),
    InsufficientData(InsufficientData),
}

impl BiasAssessment {
    pub fn is_insufficient(&self) -> bool {
        matches!(self, BiasAssessment::InsufficientData(_))
    }

    pub fn report(&self) -> Option<&BiasReport> {
        match self {
            BiasAssessment::Assessed(report) => Some(report),
            BiasAssessment::InsufficientData(_) => None,
        }
    }
}
