use context_core::config::ComparisonConfig;
use context_core::models::{BiasAssessment, BiasType};
use context_observers::{compare_observers, detect_systematic_bias, ObserverAnalyzer};
use test_fixtures::{load_scenario, measurement};

fn strings(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap()
}

#[test]
fn compare_partitions_objects() {
    let log = vec![
        measurement("auth", "requires", "identity", 0.5, "alice"),
        measurement("auth", "uses", "jwt", 0.6, "alice"),
        measurement("auth", "requires", "identity", 0.8, "bob"),
        measurement("auth", "uses", "oauth", 0.4, "bob"),
        measurement("payment", "uses", "jwt", 0.9, "bob"),
    ];
    let cmp = compare_observers("auth", "alice", "bob", &log);

    assert_eq!(cmp.shared_observations, vec!["identity"]);
    assert_eq!(cmp.only_observer_a, vec!["jwt"]);
    assert_eq!(cmp.only_observer_b, vec!["oauth"]);
    assert!((cmp.agreement - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(cmp.observer_a_count, 2);
    assert_eq!(cmp.observer_b_count, 2);

    let d = &cmp.confidence_deltas["identity"];
    assert!((d.delta - 0.3).abs() < 1e-12);
    assert_eq!(d.predicate_a, "requires");
    assert_eq!(d.predicate_b, "requires");
}

#[test]
fn compare_with_silent_observer_has_zero_agreement() {
    let log = vec![measurement("auth", "uses", "jwt", 0.6, "alice")];
    let cmp = compare_observers("auth", "alice", "nobody", &log);
    assert_eq!(cmp.agreement, 0.0);
    assert!(cmp.shared_observations.is_empty());
    assert_eq!(cmp.only_observer_a, vec!["jwt"]);
    assert!(cmp.confidence_deltas.is_empty());
}

#[test]
fn two_shared_subjects_is_insufficient() {
    let scenario = load_scenario("golden/observers/bias_insufficient.json");
    let result = detect_systematic_bias("obs2", "obs1", 3, 0.1, &scenario.measurements);

    match result {
        BiasAssessment::InsufficientData(info) => {
            assert_eq!(info.required as u64, scenario.expected["required"].as_u64().unwrap());
            assert_eq!(info.available as u64, scenario.expected["available"].as_u64().unwrap());
            assert!(info.message.contains("shared subjects"));
        }
        BiasAssessment::Assessed(report) => panic!("expected insufficient data, got {report:?}"),
    }
}

#[test]
fn reference_leaning_higher_reads_overconfident() {
    let scenario = load_scenario("golden/observers/bias_overconfident.json");
    let expected = &scenario.expected;
    let result = detect_systematic_bias("obs2", "obs1", 3, 0.1, &scenario.measurements);
    let report = result.report().expect("enough shared subjects");

    assert_eq!(report.bias_type, BiasType::Overconfident);
    assert_eq!(report.bias_type.to_string(), expected["bias_type"].as_str().unwrap());
    assert!(
        (report.average_confidence_delta - expected["average_confidence_delta"].as_f64().unwrap())
            .abs()
            < 1e-9
    );
    assert_eq!(report.sample_size as u64, expected["sample_size"].as_u64().unwrap());
    assert_eq!(report.shared_subjects, strings(&expected["shared_subjects"]));
    assert_eq!(report.blind_spots, strings(&expected["blind_spots"]));
    assert_eq!(report.only_observer, strings(&expected["only_observer"]));
}

#[test]
fn swapping_roles_flips_the_verdict() {
    let scenario = load_scenario("golden/observers/bias_overconfident.json");
    let result = detect_systematic_bias("obs1", "obs2", 3, 0.1, &scenario.measurements);
    let report = result.report().unwrap();
    assert_eq!(report.bias_type, BiasType::Underconfident);
    assert_eq!(report.blind_spots, vec!["metrics"]);
    assert_eq!(report.only_observer, vec!["billing"]);
}

#[test]
fn deltas_run_reference_minus_observer() {
    let mut log = Vec::new();
    for subject in ["a", "b", "c"] {
        log.push(measurement(subject, "uses", "x", 0.5, "ref"));
        log.push(measurement(subject, "uses", "x", 0.9, "obs"));
    }
    let result = detect_systematic_bias("obs", "ref", 3, 0.1, &log);
    let report = result.report().unwrap();
    assert!((report.average_confidence_delta + 0.4).abs() < 1e-9);
    assert_eq!(report.bias_type, BiasType::Underconfident);
    assert_eq!(report.sample_size, 3);
}

#[test]
fn small_deltas_are_calibrated() {
    let mut log = Vec::new();
    for subject in ["a", "b", "c"] {
        log.push(measurement(subject, "uses", "x", 0.50, "ref"));
        log.push(measurement(subject, "uses", "x", 0.55, "obs"));
    }
    let result = detect_systematic_bias("obs", "ref", 3, 0.1, &log);
    assert_eq!(result.report().unwrap().bias_type, BiasType::Calibrated);
}

#[test]
fn shared_subjects_without_shared_objects_average_zero() {
    let mut log = Vec::new();
    for subject in ["a", "b", "c"] {
        log.push(measurement(subject, "uses", "x", 0.2, "ref"));
        log.push(measurement(subject, "uses", "y", 0.9, "obs"));
    }
    let report = detect_systematic_bias("obs", "ref", 3, 0.1, &log);
    let report = report.report().unwrap();
    assert_eq!(report.sample_size, 0);
    assert_eq!(report.average_confidence_delta, 0.0);
    assert_eq!(report.bias_type, BiasType::Calibrated);
}

#[test]
fn analyzer_applies_configured_minimum() {
    let scenario = load_scenario("golden/observers/bias_insufficient.json");
    let analyzer = ObserverAnalyzer::new(&ComparisonConfig {
        min_shared_subjects: 2,
        bias_margin: 0.1,
    });
    assert!(!analyzer.bias("obs2", "obs1", None, &scenario.measurements).is_insufficient());
    assert!(analyzer.bias("obs2", "obs1", Some(5), &scenario.measurements).is_insufficient());

    let default = ObserverAnalyzer::default();
    assert_eq!(default.config().min_shared_subjects, 3);
}

#[test]
fn assessment_serializes_with_status_tag() {
    let scenario = load_scenario("golden/observers/bias_insufficient.json");
    let result = detect_systematic_bias("obs2", "obs1", 3, 0.1, &scenario.measurements);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "insufficient_data");
    assert_eq!(json["available"], 2);
}
