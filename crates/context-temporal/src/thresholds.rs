//! Stage thresholds derived from the log's confidence-spread distribution.

use std::collections::HashMap;

use context_core::models::StageThresholds;
use context_core::Measurement;

/// Thresholds used when the log is empty.
pub const FALLBACK_THRESHOLDS: (f64, f64, f64) = (0.25, 0.5, 0.75);

/// Smallest gap enforced between consecutive thresholds.
pub const MIN_THRESHOLD_STEP: f64 = 0.01;

/// Quartile boundaries of per-subject confidence spread.
///
/// Each subject with at least two measurements contributes `max - min` of
/// its confidences. When no subject qualifies, the whole log's mean
/// absolute deviation stands in as the only sample. The result is always
/// strictly increasing.
pub fn derive_stage_thresholds(log: &[Measurement]) -> StageThresholds {
    if log.is_empty() {
        let (q1, q2, q3) = FALLBACK_THRESHOLDS;
        return StageThresholds::fixed(q1, q2, q3);
    }

    let mut spreads = subject_spreads(log);
    if spreads.is_empty() {
        spreads.push(mean_absolute_deviation(log));
    }
    spreads.sort_by(|a, b| a.total_cmp(b));

    let n = spreads.len();
    let (q1, q2, q3) = if n >= 4 {
        (spreads[n / 4], spreads[n / 2], spreads[3 * n / 4])
    } else {
        let v = spreads[n - 1];
        (v / 4.0, v / 2.0, 3.0 * v / 4.0)
    };

    let q2 = q2.max(q1 + MIN_THRESHOLD_STEP);
    let q3 = q3.max(q2 + MIN_THRESHOLD_STEP);

    StageThresholds {
        q1,
        q2,
        q3,
        derived: true,
        sample_count: n,
    }
}

fn subject_spreads(log: &[Measurement]) -> Vec<f64> {
    // subject -> (min, max, count)
    let mut ranges: HashMap<&str, (f64, f64, usize)> = HashMap::new();
    for m in log {
        let c = m.confidence();
        let entry = ranges.entry(m.subject.as_str()).or_insert((c, c, 0));
        entry.0 = entry.0.min(c);
        entry.1 = entry.1.max(c);
        entry.2 += 1;
    }
    ranges
        .into_values()
        .filter(|(_, _, count)| *count >= 2)
        .map(|(min, max, _)| max - min)
        .collect()
}

fn mean_absolute_deviation(log: &[Measurement]) -> f64 {
    let n = log.len() as f64;
    let mean = log.iter().map(Measurement::confidence).sum::<f64>() / n;
    log.iter().map(|m| (m.confidence() - mean).abs()).sum::<f64>() / n
}
