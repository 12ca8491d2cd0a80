//! Pairwise correlation matrix over a chosen set of concepts.

use serde::{Deserialize, Serialize};

use context_core::Measurement;

use crate::correlation::score_profiles;
use crate::relations::{RelationIndex, RelationProfile};

/// Pairwise correlations between a set of concepts. The diagonal is 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub concepts: Vec<String>,
    /// Row-major, `values[i][j]` = correlation(concepts[i], concepts[j]).
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Matrix over the given concepts.
    pub fn compute(measurements: &[Measurement], concepts: &[String]) -> Self {
        let index = RelationIndex::build(measurements);
        let empty = RelationProfile::default();

        let values = concepts
            .iter()
            .map(|a| {
                let pa = index.profile(a).unwrap_or(&empty);
                concepts
                    .iter()
                    .map(|b| {
                        if a == b {
                            1.0
                        } else {
                            let pb = index.profile(b).unwrap_or(&empty);
                            score_profiles(a, pa, b, pb).correlation
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            concepts: concepts.to_vec(),
            values,
        }
    }

    /// Matrix over every distinct subject in the log, in first-seen order.
    pub fn for_all_subjects(measurements: &[Measurement]) -> Self {
        let concepts: Vec<String> = RelationIndex::build(measurements)
            .subjects()
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::compute(measurements, &concepts)
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.concepts.iter().position(|c| c == a)?;
        let j = self.concepts.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}
