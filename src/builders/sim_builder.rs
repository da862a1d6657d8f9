//! Builders to construct simulations from configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{SimConfig, StaffingOrder};
use crate::core::roster::Roster;
use crate::core::scheduler::Simulation;
use crate::core::task::{Task, TaskId};
use crate::core::{SchedulerError, TaskRegistry};

/// Build a simulation from configuration and a task-generation seed.
///
/// Deterministic: equal configs and seeds yield identical backlogs and,
/// with `StaffingOrder::Roster`, identical event streams. Tasks draw
/// `resources_required` uniformly from the configured choice set and
/// duration from the inclusive configured range.
///
/// # Errors
///
/// [`SchedulerError::Configuration`] when validation rejects the config.
pub fn build_simulation(cfg: &SimConfig, seed: u64) -> Result<Simulation, SchedulerError> {
    cfg.validate().map_err(SchedulerError::Configuration)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let (low, high) = cfg.duration_range;
    let tasks: Vec<Task> = (0..cfg.task_count)
        .map(|id| {
            let resources = cfg.resource_choices[rng.random_range(0..cfg.resource_choices.len())];
            let duration = rng.random_range(low..=high);
            Task::new(id as TaskId, resources, duration)
        })
        .collect();

    let roster = Roster::new(
        cfg.workers
            .iter()
            .map(|w| (w.label.clone(), w.capacity)),
    );

    let shuffle = match cfg.staffing_order {
        StaffingOrder::Roster => None,
        StaffingOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
    };

    tracing::info!(
        tasks = tasks.len(),
        workers = roster.len(),
        seed,
        "simulation initialized"
    );
    Ok(Simulation::new(TaskRegistry::new(tasks), roster, shuffle))
}

/// Build a simulation from an explicit backlog instead of a generator:
/// one `(resources_required, duration)` pair per task, ids assigned in
/// order, and `(label, capacity)` pairs in roster order. Staffing uses
/// fixed roster order.
///
/// Useful for reproducing exact scenarios in tests and demos.
///
/// # Errors
///
/// [`SchedulerError::Configuration`] for an empty roster, a zero
/// capacity, a zero resource requirement or duration, or a requirement
/// exceeding the roster size.
pub fn build_scenario(
    tasks: impl IntoIterator<Item = (u32, u32)>,
    workers: impl IntoIterator<Item = (String, u32)>,
) -> Result<Simulation, SchedulerError> {
    let roster = Roster::new(workers);
    if roster.is_empty() {
        return Err(SchedulerError::Configuration(
            "at least one worker must be defined".into(),
        ));
    }
    for w in &roster {
        if w.capacity() == 0 {
            return Err(SchedulerError::Configuration(format!(
                "worker `{}` capacity must be greater than 0",
                w.label()
            )));
        }
    }

    let mut backlog = Vec::new();
    for (id, (resources, duration)) in tasks.into_iter().enumerate() {
        if resources == 0 || duration == 0 {
            return Err(SchedulerError::Configuration(format!(
                "task {id} must require at least 1 worker and 1 tick"
            )));
        }
        if resources as usize > roster.len() {
            return Err(SchedulerError::Configuration(format!(
                "task {id} requires {resources} workers but the roster has {}",
                roster.len()
            )));
        }
        backlog.push(Task::new(id as TaskId, resources, duration));
    }

    Ok(Simulation::new(TaskRegistry::new(backlog), roster, None))
}
