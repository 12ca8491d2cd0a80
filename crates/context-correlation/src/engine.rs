//! Correlation engine: matrix, pair breakdowns and dependency graphs behind one configured threshold.

use tracing::{info, instrument};

use context_core::config::AnalysisConfig;
use context_core::models::DependencyGraph;
use context_core::Measurement;

use crate::correlation::{self, CorrelationBreakdown};
use crate::dependencies;
use crate::matrix::CorrelationMatrix;

/// Correlation and dependency analysis with a configured independence threshold.
#[derive(Debug, Clone)]
pub struct CorrelationEngine {
    threshold: f64,
}

impl CorrelationEngine {
    /// Independence threshold used when none is configured.
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    pub fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_threshold(config.independence_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn correlation(&self, measurements: &[Measurement], a: &str, b: &str) -> f64 {
        correlation::correlation(measurements, a, b)
    }

    pub fn explain(&self, measurements: &[Measurement], a: &str, b: &str) -> CorrelationBreakdown {
        correlation::correlation_breakdown(measurements, a, b)
    }

    /// Dependency graph of `subject` at the configured threshold.
    #[instrument(skip(self, measurements), fields(records = measurements.len()))]
    pub fn analyze(&self, subject: &str, measurements: &[Measurement]) -> DependencyGraph {
        let graph = dependencies::analyze_dependencies(subject, measurements, self.threshold);
        info!(
            subject = %subject,
            depends_on = graph.depends_on.len(),
            independent_of = graph.independent_of.len(),
            threshold = self.threshold,
            "dependencies analyzed"
        );
        graph
    }

    pub fn matrix(&self, measurements: &[Measurement]) -> CorrelationMatrix {
        CorrelationMatrix::for_all_subjects(measurements)
    }
}

impl Default for CorrelationEngine {
    fn default() -> Self {
        Self::new()
    }
}
