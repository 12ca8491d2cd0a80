//! Mismatch between an expected magnitude and the current estimate.

use chrono::{DateTime, Utc};
use tracing::debug;

use context_core::models::MismatchReport;
use context_core::Measurement;

use crate::recency::observe;
use crate::stage::classify_stage;
use crate::thresholds::derive_stage_thresholds;

/// Compare `expected` with what `measurements` currently say about `subject`.
///
/// `interference = delta × e^(-phase)` once the concept has a timescale and
/// its newest measurement has aged; otherwise it is the raw delta. Stage
/// thresholds come from `full_log`, not just this subject.
pub fn compute_mismatch(
    subject: &str,
    expected: f64,
    measurements: &[Measurement],
    full_log: &[Measurement],
    now: DateTime<Utc>,
) -> MismatchReport {
    let current = observe(subject, measurements, now);
    let delta = (expected - current.magnitude).abs();
    let phase = current.phase.unwrap_or(0.0);

    let interference = if current.timescale_seconds > 0.0 && phase > 0.0 {
        delta * (-phase).exp()
    } else {
        delta
    };

    let thresholds = derive_stage_thresholds(full_log);
    let stage = classify_stage(delta, phase, &thresholds);

    debug!(
        subject = %subject,
        delta,
        phase,
        interference,
        q1 = thresholds.q1,
        q2 = thresholds.q2,
        q3 = thresholds.q3,
        stage = %stage,
        "mismatch classified"
    );

    MismatchReport {
        subject: subject.to_string(),
        expected_magnitude: expected,
        measured_magnitude: current.magnitude,
        magnitude_delta: delta,
        phase: current.phase,
        timescale_seconds: current.timescale_seconds,
        interference,
        stage,
        thresholds,
    }
}
