/*!
 * Stage Configuration Tests
 * JSON loading, defaults and validation
 */

use pretty_assertions::assert_eq;
use procsim::{ConfigError, StageConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stage.json");
    fs::write(
        &path,
        r#"{
            "name": "Level 2",
            "num_cpus": 6,
            "max_processes_terminated_by_user": 5,
            "new_process_probability": 0.2,
            "rng_seed": 17
        }"#,
    )
    .unwrap();

    let config = StageConfig::from_file(&path).unwrap();
    assert_eq!(config.name, "Level 2");
    assert_eq!(config.num_cpus, 6);
    assert_eq!(config.max_processes_terminated_by_user, 5);
    assert_eq!(config.new_process_probability_numerator(), 20);
    assert_eq!(config.rng_seed, Some(17));

    // Unspecified keys keep their defaults
    let defaults = StageConfig::default();
    assert_eq!(config.max_processes, defaults.max_processes);
    assert_eq!(config.starvation_interval_ms, defaults.starvation_interval_ms);
    assert_eq!(config.io_probability, defaults.io_probability);
}

#[test]
fn test_empty_object_is_default() {
    let config = StageConfig::from_json_str("{}").unwrap();
    assert_eq!(config, StageConfig::default());
}

#[test]
fn test_round_trips_through_json() {
    let config = StageConfig {
        name: "custom".to_string(),
        num_cpus: 2,
        rng_seed: Some(5),
        ..StageConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(StageConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match StageConfig::from_file(&path) {
        Err(ConfigError::ReadFailed { path: reported, .. }) => {
            assert!(reported.ends_with("absent.json"));
        }
        other => panic!("expected ReadFailed, got {other:?}"),
    }
}

#[test]
fn test_malformed_json() {
    let result = StageConfig::from_json_str("{ \"num_cpus\": ");
    assert!(matches!(result, Err(ConfigError::ParseFailed(_))));

    let result = StageConfig::from_json_str(r#"{ "num_cpus": "four" }"#);
    assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
}

#[test]
fn test_invalid_values_name_the_field() {
    let cases = [
        (r#"{ "num_cpus": 0 }"#, "num_cpus"),
        (r#"{ "num_cpus": 21 }"#, "num_cpus"),
        (r#"{ "max_processes": 43 }"#, "max_processes"),
        (r#"{ "max_processes_terminated_by_user": 21 }"#, "max_processes_terminated_by_user"),
        (r#"{ "new_process_probability": 1.5 }"#, "new_process_probability"),
        (r#"{ "io_probability": -0.1 }"#, "io_probability"),
        (
            r#"{ "io_min_waiting_time_ms": 500, "io_max_waiting_time_ms": 100 }"#,
            "io_min_waiting_time_ms",
        ),
        (r#"{ "min_cpu_burst_ms": 0 }"#, "min_cpu_burst_ms"),
        (r#"{ "max_sort_key": 0 }"#, "max_sort_key"),
        (r#"{ "starvation_interval_ms": 0 }"#, "starvation_interval_ms"),
    ];

    for (json, expected) in cases {
        match StageConfig::from_json_str(json) {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected, "{json}"),
            other => panic!("{json}: expected InvalidValue, got {other:?}"),
        }
    }
}

#[test]
fn test_zero_user_terminations_allowed() {
    let config = StageConfig::from_json_str(r#"{ "max_processes_terminated_by_user": 0 }"#).unwrap();
    assert_eq!(config.max_processes_terminated_by_user, 0);
}
