//! Stage classification of a mismatch from its delta and phase.

use context_core::models::{Stage, StageThresholds};

/// One natural cycle. Phases at or beyond it count as old.
pub const PHASE_CYCLE: f64 = 1.0;

/// Four-state classification of a mismatch.
///
/// | delta        | phase < 1      | phase ≥ 1      |
/// |--------------|----------------|----------------|
/// | ≤ q1         | resynchronized | resynchronized |
/// | (q1, q2]     | load-bearing   | integrating    |
/// | (q2, q3]     | load-bearing   | load-bearing   |
/// | > q3         | denial         | load-bearing   |
pub fn classify_stage(delta: f64, phase: f64, thresholds: &StageThresholds) -> Stage {
    let recent = phase < PHASE_CYCLE;
    if delta <= thresholds.q1 {
        Stage::Resynchronized
    } else if delta <= thresholds.q2 {
        if recent {
            Stage::LoadBearing
        } else {
            Stage::Integrating
        }
    } else if delta <= thresholds.q3 || !recent {
        Stage::LoadBearing
    } else {
        Stage::Denial
    }
}
