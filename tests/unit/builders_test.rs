//! Tests for simulation builders

use coop_scheduler::builders::{build_scenario, build_simulation};
use coop_scheduler::config::{SimConfig, StaffingOrder, WorkerConfig};
use coop_scheduler::core::SchedulerError;

fn config() -> SimConfig {
    SimConfig {
        task_count: 25,
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
fn test_build_simulation_shape() {
    let sim = build_simulation(&config(), 42).unwrap();

    assert_eq!(sim.registry().len(), 25);
    assert_eq!(sim.roster().len(), 3);
    assert_eq!(sim.roster().worker(1).unwrap().label(), "Agent 2");
    assert_eq!(sim.roster().total_capacity(), 5);
    assert_eq!(sim.steps_taken(), 0);

    for task in sim.registry().iter() {
        assert!([1, 2, 3].contains(&task.resources_required()));
        assert!((5..=20).contains(&task.remaining_duration()));
        assert!(task.assigned_workers().is_empty());
        assert!(!task.is_completed());
    }
}

#[test]
fn test_build_simulation_is_deterministic() {
    let a = build_simulation(&config(), 42).unwrap();
    let b = build_simulation(&config(), 42).unwrap();

    let backlog = |sim: &coop_scheduler::core::Simulation| {
        sim.registry()
            .iter()
            .map(|t| (t.resources_required(), t.remaining_duration()))
            .collect::<Vec<_>>()
    };
    assert_eq!(backlog(&a), backlog(&b));

    let c = build_simulation(&config(), 43).unwrap();
    assert_ne!(backlog(&a), backlog(&c));
}

#[test]
fn test_build_simulation_rejects_invalid_config() {
    let mut cfg = config();
    cfg.workers.clear();
    let err = build_simulation(&cfg, 42).unwrap_err();
    assert!(matches!(err, SchedulerError::Configuration(_)));
}

#[test]
fn test_build_scenario() {
    let sim = build_scenario(
        [(1, 5), (2, 6)],
        [("A".to_string(), 2), ("B".to_string(), 1)],
    )
    .unwrap();
    assert_eq!(sim.registry().len(), 2);
    assert_eq!(sim.registry().task(1).unwrap().resources_required(), 2);
}

#[test]
fn test_build_scenario_rejects_oversized_requirement() {
    let err = build_scenario([(3, 5)], [("A".to_string(), 5)]).unwrap_err();
    assert!(matches!(err, SchedulerError::Configuration(_)));
}

#[test]
fn test_build_scenario_rejects_empty_roster() {
    let err = build_scenario([(1, 5)], std::iter::empty()).unwrap_err();
    assert!(matches!(err, SchedulerError::Configuration(_)));
}
