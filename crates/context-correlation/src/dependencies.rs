//! Dependency classifier.

use std::collections::BTreeMap;

use tracing::debug;

use context_core::models::DependencyGraph;
use context_core::Measurement;

use crate::correlation::score_profiles;
use crate::relations::{RelationIndex, RelationProfile};

/// Partition every other known concept into "depends on" and "independent of".
///
/// `depends_on` holds the distinct objects of `subject`'s relations in
/// first-seen order; `shared_structure` keeps the confidence of the first
/// relation to each of them. Every other subject in the log whose
/// correlation with `subject` is strictly below `threshold` is independent.
pub fn analyze_dependencies(
    subject: &str,
    measurements: &[Measurement],
    threshold: f64,
) -> DependencyGraph {
    let mut depends_on: Vec<String> = Vec::new();
    let mut shared_structure = BTreeMap::new();

    for m in measurements.iter().filter(|m| m.subject == subject) {
        if !shared_structure.contains_key(&m.object) {
            depends_on.push(m.object.clone());
            shared_structure.insert(m.object.clone(), m.confidence());
        }
    }

    let index = RelationIndex::build(measurements);
    let empty = RelationProfile::default();
    let subject_profile = index.profile(subject).unwrap_or(&empty);

    let mut independent_of = Vec::new();
    for &candidate in index.subjects() {
        if candidate == subject || shared_structure.contains_key(candidate) {
            continue;
        }
        let candidate_profile = index.profile(candidate).unwrap_or(&empty);
        let score = score_profiles(subject, subject_profile, candidate, candidate_profile);
        debug!(
            subject = %subject,
            candidate = %candidate,
            correlation = score.correlation,
            direct_edge = score.direct_edge,
            "scored candidate"
        );
        if score.correlation < threshold {
            independent_of.push(candidate.to_string());
        }
    }

    DependencyGraph {
        subject: subject.to_string(),
        depends_on,
        independent_of,
        shared_structure,
        threshold,
    }
}
