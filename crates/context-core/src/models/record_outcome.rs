use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;

/// Result of appending a measurement to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub status: String,
    pub measurement: Measurement,
    pub message: String,
    /// True if the requested confidence was lowered to the ceiling.
    pub capped: bool,
}

impl RecordOutcome {
    pub fn recorded(measurement: Measurement, capped: bool) -> Self {
        let message = format!(
            "Added: {} {} {}",
            measurement.subject, measurement.predicate, measurement.object
        );
        Self {
            status: "recorded".to_string(),
            measurement,
            message,
            capped,
        }
    }
}
