//! The scheduler loop: one simulated step in four ordered phases.
//!
//! Phase order is the correctness backbone:
//!
//! 1. **Staffing** - pending tasks claim workers, all-or-nothing.
//! 2. **Reporting** - read-only observation of every active assignment.
//! 3. **Progress** - each distinct staffed task loses exactly one tick.
//! 4. **Cleanup** - completed tasks release their workers.
//!
//! The loop is single-threaded and runs each step to completion; only the
//! step driver mutates the registry and roster.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::error::SchedulerError;
use crate::core::event::StepEvent;
use crate::core::registry::TaskRegistry;
use crate::core::report::EventSink;
use crate::core::roster::{Roster, Worker, WorkerId};
use crate::core::task::{Task, TaskId};

/// Advance simulated time by one tick using fixed roster order for the
/// staffing tie-break (earliest-listed worker wins).
///
/// Returns the step's event sequence: `Assigned` in task-id order, then
/// `Progress` in roster order, then `Completed` in task-id order.
///
/// # Errors
///
/// [`SchedulerError::CapacityViolation`] only on an internal invariant
/// breach; unreachable under the phase ordering above.
pub fn step(
    registry: &mut TaskRegistry,
    roster: &mut Roster,
) -> Result<Vec<StepEvent>, SchedulerError> {
    let order: Vec<WorkerId> = roster.ids().collect();
    step_with_order(registry, roster, &order)
}

/// One step with an explicit candidate scan order.
///
/// `order` must be a permutation of the roster's worker ids. The default
/// driver passes roster order; [`Simulation`] passes a shuffled order when
/// explicitly configured to.
pub(crate) fn step_with_order(
    registry: &mut TaskRegistry,
    roster: &mut Roster,
    order: &[WorkerId],
) -> Result<Vec<StepEvent>, SchedulerError> {
    let mut events = Vec::new();
    staff_pending(registry, roster, order, &mut events)?;
    observe_assignments(registry, roster, &mut events);
    apply_progress(registry, &mut events);
    cleanup(registry, roster);
    Ok(events)
}

/// Phase 1: staff pending tasks in creation order, all-or-nothing.
///
/// Candidates are scanned in `order`; a task with too few candidates is
/// left untouched for this step and reconsidered verbatim next step.
/// Starvation of under-resourced tasks is an accepted outcome, not an
/// error.
fn staff_pending(
    registry: &mut TaskRegistry,
    roster: &mut Roster,
    order: &[WorkerId],
    events: &mut Vec<StepEvent>,
) -> Result<(), SchedulerError> {
    // All-or-nothing staffing means pending tasks always carry zero
    // assigned workers, so `needed` equals the full requirement.
    let pending: Vec<(TaskId, usize)> = registry
        .pending_tasks()
        .map(|t| {
            (
                t.id(),
                t.resources_required() as usize - t.assigned_workers().len(),
            )
        })
        .collect();

    for (task_id, needed) in pending {
        let candidates: Vec<WorkerId> = order
            .iter()
            .copied()
            .filter(|&wid| {
                roster.worker(wid).is_some_and(Worker::has_spare_capacity)
                    && registry.task(task_id).is_some_and(|t| !t.has_worker(wid))
            })
            .take(needed)
            .collect();

        if candidates.len() < needed {
            tracing::debug!(task = task_id, needed, "insufficient candidates, task waits");
            continue;
        }

        registry.record_assignment(roster, task_id, &candidates)?;
        tracing::info!(task = task_id, workers = ?candidates, "task staffed");
        events.push(StepEvent::Assigned {
            task: task_id,
            workers: candidates,
        });
    }
    Ok(())
}

/// Phase 2: emit a progress observation for every active assignment.
///
/// Read-only: durations are reported as they stand before this step's
/// decrement, so telemetry collaborators can hook here without touching
/// simulation state.
fn observe_assignments(registry: &TaskRegistry, roster: &Roster, events: &mut Vec<StepEvent>) {
    for worker in roster {
        for &tid in worker.current_tasks() {
            if let Some(task) = registry.task(tid) {
                events.push(StepEvent::Progress {
                    worker: worker.id(),
                    task: tid,
                    remaining_before: task.remaining_duration(),
                });
            }
        }
    }
}

/// Phase 3: decrement each distinct staffed task exactly once.
///
/// A task held by `k` workers still loses exactly one tick: cooperation
/// affects which tasks can run concurrently, never an individual task's
/// completion speed.
fn apply_progress(registry: &mut TaskRegistry, events: &mut Vec<StepEvent>) {
    let active: Vec<TaskId> = registry
        .iter()
        .filter(|t| t.is_fully_staffed() && !t.is_completed())
        .map(Task::id)
        .collect();

    for task_id in active {
        if registry.advance_progress(task_id) {
            events.push(StepEvent::Completed { task: task_id });
        }
    }
}

/// Phase 4: release workers from completed tasks.
///
/// Worker iteration order is irrelevant here; retirement per worker is
/// independent and idempotent per task.
fn cleanup(registry: &mut TaskRegistry, roster: &mut Roster) {
    let ids: Vec<WorkerId> = roster.ids().collect();
    for wid in ids {
        registry.retire_completed(roster, wid);
    }
}

/// Outcome of driving a simulation with [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps taken over the simulation's whole lifetime.
    pub steps: u64,
    /// Tasks completed so far.
    pub completed_tasks: usize,
    /// Whether the backlog was fully drained.
    pub exhausted: bool,
}

/// An isolated simulation instance: registry, roster, and step counter.
///
/// Instances share nothing; running several in parallel requires no
/// coordination. Construct via [`crate::builders::build_simulation`].
#[derive(Debug)]
pub struct Simulation {
    registry: TaskRegistry,
    roster: Roster,
    steps_taken: u64,
    shuffle: Option<StdRng>,
}

impl Simulation {
    pub(crate) const fn new(
        registry: TaskRegistry,
        roster: Roster,
        shuffle: Option<StdRng>,
    ) -> Self {
        Self {
            registry,
            roster,
            steps_taken: 0,
            shuffle,
        }
    }

    /// The backlog.
    #[must_use]
    pub const fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// The worker pool.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Steps taken since initialization.
    #[must_use]
    pub const fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// True iff every task has completed.
    #[must_use]
    pub fn is_backlog_exhausted(&self) -> bool {
        self.registry.is_backlog_exhausted()
    }

    /// Advance simulated time by one tick and return the step's events.
    ///
    /// Uses fixed roster order unless the simulation was configured with
    /// shuffled staffing, in which case the candidate scan order is drawn
    /// from the shuffle's own seeded rng.
    ///
    /// # Errors
    ///
    /// Propagates [`SchedulerError::CapacityViolation`] from the staffing
    /// phase; unreachable under correct phase ordering.
    pub fn step(&mut self) -> Result<Vec<StepEvent>, SchedulerError> {
        let mut order: Vec<WorkerId> = self.roster.ids().collect();
        if let Some(rng) = self.shuffle.as_mut() {
            order.shuffle(rng);
        }
        self.steps_taken += 1;
        tracing::debug!(step = self.steps_taken, "running step");
        step_with_order(&mut self.registry, &mut self.roster, &order)
    }

    /// Drive the simulation until the backlog is exhausted or `max_steps`
    /// further steps have run, feeding every event to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Simulation::step`].
    pub fn run(
        &mut self,
        max_steps: u64,
        sink: &mut dyn EventSink,
    ) -> Result<RunSummary, SchedulerError> {
        let mut steps_this_run = 0;
        while !self.registry.is_backlog_exhausted() && steps_this_run < max_steps {
            sink.begin_step(self.steps_taken + 1);
            let events = self.step()?;
            for event in &events {
                sink.record(event);
            }
            steps_this_run += 1;
        }

        let exhausted = self.registry.is_backlog_exhausted();
        let completed_tasks = self.registry.iter().filter(|t| t.is_completed()).count();
        if exhausted {
            tracing::info!(steps = self.steps_taken, "backlog exhausted");
        } else {
            tracing::warn!(
                steps = self.steps_taken,
                pending = self.registry.len() - completed_tasks,
                "step budget reached with pending work"
            );
        }
        Ok(RunSummary {
            steps: self.steps_taken,
            completed_tasks,
            exhausted,
        })
    }
}
