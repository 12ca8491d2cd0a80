use std::fmt;

use serde::{Deserialize, Serialize};

/// Processing stage of a mismatch between expectation and evidence.
///
/// Ordered from settled to acute: resynchronized → integrating → load-bearing → denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Expectation and evidence agree.
    Resynchronized,
    /// A moderate gap that has had time to settle.
    Integrating,
    /// A gap the belief system is carrying.
    LoadBearing,
    /// A large, recent gap.
    Denial,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Resynchronized,
        Stage::Integrating,
        Stage::LoadBearing,
        Stage::Denial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Resynchronized => "resynchronized",
            Stage::Integrating => "integrating",
            Stage::LoadBearing => "load-bearing",
            Stage::Denial => "denial",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage boundaries derived from the log's confidence-spread distribution.
/// Always strictly increasing: `q1 < q2 < q3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageThresholds {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// False when the log was empty and the fixed fallback was used.
    pub derived: bool,
    /// Number of spread samples the quartiles came from.
    pub sample_count: usize,
}

impl StageThresholds {
    /// Build thresholds from explicit boundaries (used by classifiers and tests).
    pub fn fixed(q1: f64, q2: f64, q3: f64) -> Self {
        Self {
            q1,
            q2,
            q3,
            derived: false,
            sample_count: 0,
        }
    }

    pub fn is_monotonic(&self) -> bool {
        self.q1 < self.q2 && self.q2 < self.q3
    }
}
