//! Test fixture loader for quantum-context golden scenarios, plus small
//! measurement builders shared by the integration tests of every crate.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use context_core::measurement::parse_timestamp;
use context_core::Measurement;

/// The `test-fixtures` crate directory, found by walking up from the
/// calling crate's manifest so every workspace member resolves the same files.
fn fixtures_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&start)
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures/golden above {start}"))
}

/// Read a golden file (path relative to `test-fixtures/`) into `T`.
///
/// # Panics
/// On a missing file or a shape mismatch, naming the file.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("cannot decode {}: {e}", path.display()))
}

/// A golden file as untyped JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A golden scenario: a frozen log, an optional frozen clock, and the
/// expected outputs as free-form JSON.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub now: Option<String>,
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub expected: serde_json::Value,
}

impl Scenario {
    /// The scenario's frozen clock.
    ///
    /// # Panics
    /// Panics if the scenario has no `now` or it does not parse.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_else(|| panic!("scenario '{}' has no valid `now`", self.description))
    }

    /// Records whose subject matches, in log order.
    pub fn measurements_for(&self, subject: &str) -> Vec<Measurement> {
        self.measurements
            .iter()
            .filter(|m| m.subject == subject)
            .cloned()
            .collect()
    }
}

/// Load a golden scenario.
pub fn load_scenario(relative_path: &str) -> Scenario {
    load_fixture(relative_path)
}

/// A measurement stamped at `at`.
pub fn measurement_at(
    subject: &str,
    predicate: &str,
    object: &str,
    confidence: f64,
    observer: &str,
    at: DateTime<Utc>,
) -> Measurement {
    Measurement::new(subject, predicate, object, confidence, observer, at)
}

/// A measurement stamped now.
pub fn measurement(
    subject: &str,
    predicate: &str,
    object: &str,
    confidence: f64,
    observer: &str,
) -> Measurement {
    measurement_at(subject, predicate, object, confidence, observer, Utc::now())
}

/// The four-record auth/payment log: both concepts use a database, each
/// requires its own thing, one observer saw everything.
pub fn auth_payment_log() -> Vec<Measurement> {
    vec![
        measurement("auth", "requires", "identity", 0.7, "alice"),
        measurement("auth", "uses", "database", 0.5, "alice"),
        measurement("payment", "requires", "card", 0.7, "alice"),
        measurement("payment", "uses", "database", 0.6, "alice"),
    ]
}
