//! Systematic bias of one observer against a reference observer.

use std::collections::BTreeSet;

use tracing::debug;

use context_core::models::{BiasAssessment, BiasReport, BiasType, InsufficientData};
use context_core::Measurement;

use crate::compare::compare_observers;

fn subjects_of<'a>(measurements: &'a [Measurement], observer: &str) -> BTreeSet<&'a str> {
    measurements
        .iter()
        .filter(|m| m.observer == observer)
        .map(|m| m.subject.as_str())
        .collect()
}

/// Systematic confidence lean between `observer` and `reference`.
///
/// Needs at least `min_shared_subjects` subjects recorded by both; below
/// that the answer is [`BiasAssessment::InsufficientData`]. Otherwise every
/// shared object on every shared subject contributes one delta from
/// [`compare_observers`] with `observer` as side A, i.e.
/// `reference - observer`, and the mean is classified against `±margin`.
/// A positive mean (the reference stated things more confidently) reads as
/// overconfident.
pub fn detect_systematic_bias(
    observer: &str,
    reference: &str,
    min_shared_subjects: usize,
    margin: f64,
    measurements: &[Measurement],
) -> BiasAssessment {
    let observer_subjects = subjects_of(measurements, observer);
    let reference_subjects = subjects_of(measurements, reference);

    let shared: Vec<&str> = observer_subjects
        .intersection(&reference_subjects)
        .copied()
        .collect();

    if shared.len() < min_shared_subjects {
        return BiasAssessment::InsufficientData(InsufficientData {
            observer: observer.to_string(),
            reference: reference.to_string(),
            required: min_shared_subjects,
            available: shared.len(),
            message: format!(
                "Need at least {} shared subjects to detect bias, found {}",
                min_shared_subjects,
                shared.len()
            ),
        });
    }

    let deltas: Vec<f64> = shared
        .iter()
        .flat_map(|subject| {
            compare_observers(subject, observer, reference, measurements)
                .confidence_deltas
                .into_values()
                .map(|d| d.delta)
        })
        .collect();

    let average = if deltas.is_empty() {
        0.0
    } else {
        deltas.iter().sum::<f64>() / deltas.len() as f64
    };
    let bias_type = BiasType::classify(average, margin);

    debug!(
        observer = %observer,
        reference = %reference,
        shared = shared.len(),
        samples = deltas.len(),
        average,
        bias = %bias_type,
        "bias computed"
    );

    BiasAssessment::Assessed(BiasReport {
        observer: observer.to_string(),
        reference: reference.to_string(),
        bias_type,
        average_confidence_delta: average,
        shared_subjects: shared.iter().map(|s| s.to_string()).collect(),
        only_observer: observer_subjects
            .difference(&reference_subjects)
            .map(|s| s.to_string())
            .collect(),
        blind_spots: reference_subjects
            .difference(&observer_subjects)
            .map(|s| s.to_string())
            .collect(),
        sample_size: deltas.len(),
    })
}
