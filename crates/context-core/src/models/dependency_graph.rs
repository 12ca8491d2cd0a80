use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which concepts a subject structurally depends on, and which it is independent of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub subject: String,
    /// Distinct objects of the subject's relations, in first-seen order.
    pub depends_on: Vec<String>,
    /// Other subjects whose correlation with `subject` fell below the threshold.
    /// Set semantics: callers must not rely on the order.
    pub independent_of: Vec<String>,
    /// Confidence of the first relation to each `depends_on` object.
    pub shared_structure: BTreeMap<String, f64>,
    /// Independence threshold the graph was computed with.
    #[serde(default)]
    pub threshold: f64,
}

impl DependencyGraph {
    pub fn depends_on(&self, concept: &str) -> bool {
        self.depends_on.iter().any(|c| c == concept)
    }

    pub fn is_independent_of(&self, concept: &str) -> bool {
        self.independent_of.iter().any(|c| c == concept)
    }
}
