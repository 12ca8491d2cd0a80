//! Correlation heuristic.
//!
//! ```text
//! direct edge (A is an object of B, or B of A)  → 0.8
//! base = 0.7 × J(strongA, strongB) + 0.15 × J(weakA, weakB)
//! base > 0  → min(base × (1 + 0.5 × J(observersA, observersB)), 1.0)
//! base = 0  → 0
//! ```
//!
//! `J` is the Jaccard ratio, 0 for two empty sets. A shared observer only
//! amplifies structural overlap that already exists; it never creates
//! correlation on its own.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use context_core::Measurement;

use crate::relations::RelationProfile;

/// Score returned when one concept is a direct object of the other.
pub const DIRECT_EDGE_CORRELATION: f64 = 0.8;
/// Weight of structural (strong) overlap.
pub const STRONG_WEIGHT: f64 = 0.7;
/// Weight of weak overlap.
pub const WEAK_WEIGHT: f64 = 0.15;
/// Maximum amplification from a fully shared observer set.
pub const OBSERVER_BOOST: f64 = 0.5;

/// Every intermediate value of one correlation computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationBreakdown {
    pub strong_overlap: f64,
    pub weak_overlap: f64,
    pub observer_overlap: f64,
    pub base: f64,
    /// The direct-edge short circuit fired.
    pub direct_edge: bool,
    pub correlation: f64,
}

/// Correlation between concepts `a` and `b` over `measurements`, in [0, 1].
pub fn correlation(measurements: &[Measurement], a: &str, b: &str) -> f64 {
    correlation_breakdown(measurements, a, b).correlation
}

/// [`correlation`] with every intermediate value.
pub fn correlation_breakdown(
    measurements: &[Measurement],
    a: &str,
    b: &str,
) -> CorrelationBreakdown {
    let profile_a = RelationProfile::build(a, measurements);
    let profile_b = RelationProfile::build(b, measurements);
    score_profiles(a, &profile_a, b, &profile_b)
}

/// Score two prebuilt profiles.
pub fn score_profiles(
    a: &str,
    profile_a: &RelationProfile<'_>,
    b: &str,
    profile_b: &RelationProfile<'_>,
) -> CorrelationBreakdown {
    if profile_a.is_empty() && profile_b.is_empty() {
        return CorrelationBreakdown::default();
    }

    if profile_b.points_at(a) || profile_a.points_at(b) {
        return CorrelationBreakdown {
            direct_edge: true,
            correlation: DIRECT_EDGE_CORRELATION,
            ..CorrelationBreakdown::default()
        };
    }

    let strong_overlap = jaccard(&profile_a.strong, &profile_b.strong);
    let weak_overlap = jaccard(&profile_a.weak, &profile_b.weak);
    let observer_overlap = jaccard(&profile_a.observers, &profile_b.observers);

    let base = STRONG_WEIGHT * strong_overlap + WEAK_WEIGHT * weak_overlap;
    let correlation = if base > 0.0 {
        (base * (1.0 + OBSERVER_BOOST * observer_overlap)).min(1.0)
    } else {
        0.0
    };

    CorrelationBreakdown {
        strong_overlap,
        weak_overlap,
        observer_overlap,
        base,
        direct_edge: false,
        correlation,
    }
}

/// `|x ∩ y| / |x ∪ y|`, or 0 when both are empty.
pub fn jaccard<T: Eq + Hash>(x: &HashSet<T>, y: &HashSet<T>) -> f64 {
    let intersection = x.intersection(y).count();
    let union = x.len() + y.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jaccard_of_empty_sets_is_zero() {
        let empty: HashSet<&str> = HashSet::new();
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn jaccard_partial() {
        let x = HashSet::from(["a", "b"]);
        let y = HashSet::from(["b", "c", "d"]);
        assert!((jaccard(&x, &y) - 0.25).abs() < 1e-12);
    }
}
