//! Per-object confidence comparison between two observers of one subject.

use std::collections::{BTreeMap, BTreeSet};

use context_core::models::{ConfidenceDelta, ObserverComparison};
use context_core::Measurement;

/// Records of `subject` by `observer`, keyed by object. A later record to
/// the same object replaces an earlier one.
fn by_object<'a>(
    measurements: &'a [Measurement],
    subject: &str,
    observer: &str,
) -> (BTreeMap<&'a str, &'a Measurement>, usize) {
    let mut index = BTreeMap::new();
    let mut count = 0;
    for m in measurements
        .iter()
        .filter(|m| m.subject == subject && m.observer == observer)
    {
        index.insert(m.object.as_str(), m);
        count += 1;
    }
    (index, count)
}

/// Diff what `observer_a` and `observer_b` recorded about `subject`.
///
/// Object lists are sorted. For shared objects, `delta` is
/// `confidence_b - confidence_a`.
pub fn compare_observers(
    subject: &str,
    observer_a: &str,
    observer_b: &str,
    measurements: &[Measurement],
) -> ObserverComparison {
    let (a, a_count) = by_object(measurements, subject, observer_a);
    let (b, b_count) = by_object(measurements, subject, observer_b);

    let objects_a: BTreeSet<&str> = a.keys().copied().collect();
    let objects_b: BTreeSet<&str> = b.keys().copied().collect();

    let shared: Vec<String> = objects_a.intersection(&objects_b).map(|s| s.to_string()).collect();
    let only_a: Vec<String> = objects_a.difference(&objects_b).map(|s| s.to_string()).collect();
    let only_b: Vec<String> = objects_b.difference(&objects_a).map(|s| s.to_string()).collect();

    let mut confidence_deltas = BTreeMap::new();
    for object in &shared {
        let (ma, mb) = (a[object.as_str()], b[object.as_str()]);
        confidence_deltas.insert(
            object.clone(),
            ConfidenceDelta {
                observer_a_confidence: ma.confidence(),
                observer_b_confidence: mb.confidence(),
                delta: mb.confidence() - ma.confidence(),
                predicate_a: ma.predicate.clone(),
                predicate_b: mb.predicate.clone(),
            },
        );
    }

    let agreement = if a.is_empty() || b.is_empty() {
        0.0
    } else {
        let union = objects_a.union(&objects_b).count();
        shared.len() as f64 / union as f64
    };

    ObserverComparison {
        subject: subject.to_string(),
        observer_a: observer_a.to_string(),
        observer_b: observer_b.to_string(),
        agreement,
        shared_observations: shared,
        only_observer_a: only_a,
        only_observer_b: only_b,
        confidence_deltas,
        observer_a_count: a_count,
        observer_b_count: b_count,
    }
}
