//! Tests for error types

use coop_scheduler::core::SchedulerError;

#[test]
fn test_capacity_violation_error() {
    let err = SchedulerError::CapacityViolation("worker 1 at capacity 2".to_string());
    assert_eq!(
        format!("{}", err),
        "capacity violation: worker 1 at capacity 2"
    );
}

#[test]
fn test_configuration_error() {
    let err = SchedulerError::Configuration("at least one worker must be defined".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: at least one worker must be defined"
    );
}
