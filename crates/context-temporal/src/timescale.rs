//! Natural timescale: the median positive gap between consecutive measurements.

use context_core::measurement::duration_seconds;
use context_core::Measurement;

/// Median of `values`, averaging the two middle values for an even count.
/// `None` for an empty slice. Sorts in place.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Typical interval between the given measurements, in seconds.
///
/// Zero-length gaps (batch writes) are discarded before taking the median.
/// Records whose timestamp does not parse take no part. Returns 0.0 when
/// fewer than two distinct timestamps remain.
pub fn derive_timescale<'a>(measurements: impl IntoIterator<Item = &'a Measurement>) -> f64 {
    let mut stamps: Vec<_> = measurements
        .into_iter()
        .filter_map(Measurement::recorded_at)
        .collect();
    stamps.sort();

    let mut gaps: Vec<f64> = stamps
        .windows(2)
        .map(|pair| duration_seconds(pair[1] - pair[0]))
        .filter(|gap| *gap > 0.0)
        .collect();

    median(&mut gaps).unwrap_or(0.0)
}
