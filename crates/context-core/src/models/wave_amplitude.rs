use serde::{Deserialize, Serialize};

use crate::measurement::Confidence;

/// Recency-weighted estimate of a concept, projected from its measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveAmplitude {
    pub entity: String,
    /// Raw confidence values that contributed, in log order.
    pub coefficients: Vec<f64>,
    /// Recency-weighted confidence in [0, 1].
    pub magnitude: f64,
    /// Age of the newest measurement in natural cycles. `None` when there is no data.
    pub phase: Option<f64>,
    /// Median interval between this concept's measurements. 0 when undefined.
    #[serde(default)]
    pub timescale_seconds: f64,
}

/// Coarse reading of a magnitude for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    High,
    Moderate,
    Low,
}

impl WaveAmplitude {
    /// The amplitude of a concept nobody has measured.
    pub fn empty(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            coefficients: Vec::new(),
            magnitude: 0.0,
            phase: None,
            timescale_seconds: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// High above 0.7, moderate above 0.4, low otherwise. `None` without data.
    pub fn confidence_label(&self) -> Option<ConfidenceLabel> {
        if self.is_empty() {
            return None;
        }
        Some(if self.magnitude > Confidence::HIGH {
            ConfidenceLabel::High
        } else if self.magnitude > Confidence::MODERATE {
            ConfidenceLabel::Moderate
        } else {
            ConfidenceLabel::Low
        })
    }
}
