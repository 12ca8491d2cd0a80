use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Confidence each observer gave to the same object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceDelta {
    pub observer_a_confidence: f64,
    pub observer_b_confidence: f64,
    /// `observer_b_confidence - observer_a_confidence`.
    pub delta: f64,
    pub predicate_a: String,
    pub predicate_b: String,
}

/// How two observers see one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverComparison {
    pub subject: String,
    pub observer_a: String,
    pub observer_b: String,
    /// Jaccard ratio of shared objects to all objects. 0 if either side is empty.
    pub agreement: f64,
    pub shared_observations: Vec<String>,
    pub only_observer_a: Vec<String>,
    pub only_observer_b: Vec<String>,
    pub confidence_deltas: BTreeMap<String, ConfidenceDelta>,
    pub observer_a_count: usize,
    pub observer_b_count: usize,
}
