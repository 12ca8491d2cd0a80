/// quantum-context system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Observer tag assigned to persisted records that carry none.
pub const UNKNOWN_OBSERVER: &str = "unknown";

/// Confidence ceiling for measurements recorded without evidence.
pub const CONFIDENCE_CEILING: f64 = 0.7;

/// Absolute confidence maximum, even with evidence.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Confidence used when a caller or a persisted record supplies none.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Predicates that denote a structural dependency between two concepts.
/// Every other predicate is treated as a weak relation.
pub const STRUCTURAL_PREDICATES: [&str; 4] = ["requires", "depends-on", "needs", "composed-of"];

/// Returns true if `predicate` is one of the structural-dependency predicates.
pub fn is_structural(predicate: &str) -> bool {
    STRUCTURAL_PREDICATES.contains(&predicate)
}
