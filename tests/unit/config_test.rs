//! Tests for configuration validation

use coop_scheduler::config::{SimConfig, StaffingOrder, WorkerConfig};

fn valid_config() -> SimConfig {
    SimConfig {
        task_count: 50,
        resource_choices: vec![1, 2, 3],
        duration_range: (5, 20),
        workers: vec![
            WorkerConfig {
                label: "Agent 1".to_string(),
                capacity: 2,
            },
            WorkerConfig {
                label: "Agent 2".to_string(),
                capacity: 1,
            },
            WorkerConfig {
                label: "Agent 3".to_string(),
                capacity: 2,
            },
        ],
        staffing_order: StaffingOrder::Roster,
    }
}

#[test]
fn test_sim_config_validation() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_sim_config_zero_workers() {
    let mut cfg = valid_config();
    cfg.workers.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_zero_capacity() {
    let mut cfg = valid_config();
    cfg.workers[1].capacity = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_empty_resource_choices() {
    let mut cfg = valid_config();
    cfg.resource_choices.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_zero_resource_choice() {
    let mut cfg = valid_config();
    cfg.resource_choices = vec![1, 0];
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_inverted_duration_range() {
    let mut cfg = valid_config();
    cfg.duration_range = (20, 5);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_unsatisfiable_requirement() {
    // A 4-worker task can never be staffed by a 3-worker roster.
    let mut cfg = valid_config();
    cfg.resource_choices = vec![1, 4];
    assert!(cfg.validate().is_err());
}

#[test]
fn test_sim_config_from_json() {
    let json = r#"{
        "task_count": 50,
        "resource_choices": [1, 2, 3],
        "duration_range": [5, 20],
        "workers": [
            {"label": "Agent 1", "capacity": 2},
            {"label": "Agent 2", "capacity": 1},
            {"label": "Agent 3", "capacity": 2}
        ]
    }"#;

    let cfg = SimConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.task_count, 50);
    assert!(matches!(cfg.staffing_order, StaffingOrder::Roster));
}

#[test]
fn test_sim_config_from_json_shuffled() {
    let json = r#"{
        "task_count": 10,
        "resource_choices": [1, 2],
        "duration_range": [5, 20],
        "workers": [
            {"label": "Agent 1", "capacity": 2},
            {"label": "Agent 2", "capacity": 2}
        ],
        "staffing_order": {"shuffled": {"seed": 99}}
    }"#;

    let cfg = SimConfig::from_json_str(json).unwrap();
    assert!(matches!(
        cfg.staffing_order,
        StaffingOrder::Shuffled { seed: 99 }
    ));
}

#[test]
fn test_sim_config_from_json_rejects_invalid() {
    let json = r#"{
        "task_count": 10,
        "resource_choices": [3],
        "duration_range": [5, 20],
        "workers": [{"label": "Agent 1", "capacity": 5}]
    }"#;

    // Total capacity covers the requirement but the roster is too small
    // for 3 distinct workers.
    assert!(SimConfig::from_json_str(json).is_err());
}
