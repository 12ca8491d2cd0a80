//! Per-subject listing of the record log.

use std::collections::BTreeMap;

use context_core::models::{LogSummary, RelationLine, SubjectSummary};
use context_core::Measurement;

/// Per-subject listing, subjects sorted, relations in log order.
pub fn summarize(measurements: &[Measurement]) -> LogSummary {
    let mut grouped: BTreeMap<&str, Vec<RelationLine>> = BTreeMap::new();
    for m in measurements {
        grouped.entry(m.subject.as_str()).or_default().push(RelationLine {
            predicate: m.predicate.clone(),
            object: m.object.clone(),
            confidence: m.confidence(),
            observer: m.observer.clone(),
        });
    }

    LogSummary {
        total_measurements: measurements.len(),
        subjects: grouped
            .into_iter()
            .map(|(subject, relations)| SubjectSummary {
                subject: subject.to_string(),
                count: relations.len(),
                relations,
            })
            .collect(),
    }
}
