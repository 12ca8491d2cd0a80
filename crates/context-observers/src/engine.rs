//! Observer analyzer: comparisons and bias assessment with configured margins.

use tracing::instrument;

use context_core::config::ComparisonConfig;
use context_core::models::{BiasAssessment, ObserverComparison};
use context_core::Measurement;

use crate::{bias, compare};

/// Observer comparison with a configured shared-subject minimum and bias margin.
#[derive(Debug, Clone, Default)]
pub struct ObserverAnalyzer {
    config: ComparisonConfig,
}

impl ObserverAnalyzer {
    pub fn new(config: &ComparisonConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    #[instrument(skip(self, measurements))]
    pub fn compare(
        &self,
        subject: &str,
        observer_a: &str,
        observer_b: &str,
        measurements: &[Measurement],
    ) -> ObserverComparison {
        compare::compare_observers(subject, observer_a, observer_b, measurements)
    }

    /// Bias with the configured minimum, unless `min_shared_subjects` overrides it.
    #[instrument(skip(self, measurements))]
    pub fn bias(
        &self,
        observer: &str,
        reference: &str,
        min_shared_subjects: Option<usize>,
        measurements: &[Measurement],
    ) -> BiasAssessment {
        bias::detect_systematic_bias(
            observer,
            reference,
            min_shared_subjects.unwrap_or(self.config.min_shared_subjects),
            self.config.bias_margin,
            measurements,
        )
    }
}
