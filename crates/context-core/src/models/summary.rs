use serde::{Deserialize, Serialize};

/// Per-subject listing of the whole log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub total_measurements: usize,
    /// Sorted by subject.
    pub subjects: Vec<SubjectSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub count: usize,
    /// In log order.
    pub relations: Vec<RelationLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationLine {
    pub predicate: String,
    pub object: String,
    pub confidence: f64,
    pub observer: String,
}
