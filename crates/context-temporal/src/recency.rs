//! Recency aggregator.
//!
//! ```text
//! age    = max(0, now - timestamp)          (0 when the timestamp is malformed)
//! weight = e^(-age / timescale)
//! magnitude = Σ(confidence × weight) / Σ(weight)
//! phase     = min(age) / timescale
//! ```
//!
//! With no timescale (one measurement, or all simultaneous) the magnitude is
//! the plain mean and the phase is 0.

use chrono::{DateTime, Utc};

use context_core::models::WaveAmplitude;
use context_core::Measurement;

use crate::timescale::derive_timescale;

/// Recency-weighted estimate of `entity` from its measurements.
///
/// Records for other subjects are ignored, so callers may pass the full log.
pub fn observe(entity: &str, measurements: &[Measurement], now: DateTime<Utc>) -> WaveAmplitude {
    let own: Vec<&Measurement> = measurements.iter().filter(|m| m.subject == entity).collect();
    if own.is_empty() {
        return WaveAmplitude::empty(entity);
    }

    let coefficients: Vec<f64> = own.iter().map(|m| m.confidence()).collect();
    let plain_mean = coefficients.iter().sum::<f64>() / coefficients.len() as f64;

    let timescale = derive_timescale(own.iter().copied());

    let (magnitude, phase) = if timescale > 0.0 {
        let ages: Vec<f64> = own.iter().map(|m| m.age_seconds(now)).collect();

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for (conf, age) in coefficients.iter().zip(&ages) {
            let weight = (-age / timescale).exp();
            weighted += conf * weight;
            total_weight += weight;
        }

        let magnitude = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            plain_mean
        };
        let newest = ages.iter().copied().fold(f64::INFINITY, f64::min);
        (magnitude, newest / timescale)
    } else {
        (plain_mean, 0.0)
    };

    WaveAmplitude {
        entity: entity.to_string(),
        coefficients,
        magnitude,
        phase: Some(phase),
        timescale_seconds: timescale,
    }
}
