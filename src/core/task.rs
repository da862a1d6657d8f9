//! Task records and lifecycle state.

use serde::{Deserialize, Serialize};

use crate::core::roster::WorkerId;

/// Unique task identifier, assigned in creation order starting at 0.
pub type TaskId = u64;

/// Lifecycle state of a task.
///
/// Transitions are `Unstaffed -> Staffed -> Completed`; `Completed` is
/// terminal. A task never reopens or respawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// No workers assigned; waiting for enough free capacity.
    Unstaffed,
    /// Fully staffed and making progress.
    Staffed,
    /// Duration exhausted; staffing record cleared by cleanup.
    Completed,
}

/// A unit of backlog work requiring a fixed number of cooperating workers.
///
/// Fields are private: all mutation goes through the registry's
/// invariant-preserving operations, so between steps a task is always
/// either fully staffed or not staffed at all.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    resources_required: u32,
    remaining_duration: u32,
    assigned_workers: Vec<WorkerId>,
    completed: bool,
}

impl Task {
    /// Create a task. Used by the builder; `resources_required` must be
    /// at least 1.
    pub(crate) fn new(id: TaskId, resources_required: u32, duration: u32) -> Self {
        Self {
            id,
            resources_required,
            remaining_duration: duration,
            assigned_workers: Vec::with_capacity(resources_required as usize),
            completed: false,
        }
    }

    /// Unique, immutable identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Number of distinct workers that must hold this task simultaneously
    /// before it makes progress.
    #[must_use]
    pub const fn resources_required(&self) -> u32 {
        self.resources_required
    }

    /// Ticks of work left.
    #[must_use]
    pub const fn remaining_duration(&self) -> u32 {
        self.remaining_duration
    }

    /// Workers currently assigned, in assignment order.
    #[must_use]
    pub fn assigned_workers(&self) -> &[WorkerId] {
        &self.assigned_workers
    }

    /// Whether the task has finished. Terminal.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether this task requires more than one worker at once.
    #[must_use]
    pub const fn is_cooperative(&self) -> bool {
        self.resources_required > 1
    }

    /// Whether the full resource requirement is currently met.
    #[must_use]
    pub fn is_fully_staffed(&self) -> bool {
        self.assigned_workers.len() == self.resources_required as usize
    }

    /// Derived lifecycle state.
    #[must_use]
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else if self.is_fully_staffed() {
            TaskState::Staffed
        } else {
            TaskState::Unstaffed
        }
    }

    pub(crate) fn push_worker(&mut self, worker: WorkerId) {
        self.assigned_workers.push(worker);
    }

    pub(crate) fn remove_worker(&mut self, worker: WorkerId) {
        self.assigned_workers.retain(|w| *w != worker);
    }

    pub(crate) fn has_worker(&self, worker: WorkerId) -> bool {
        self.assigned_workers.contains(&worker)
    }

    /// Apply one tick of progress; returns true if the task just
    /// completed. Caller guarantees the task is staffed and not completed.
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining_duration = self.remaining_duration.saturating_sub(1);
        if self.remaining_duration == 0 {
            self.completed = true;
        }
        self.completed
    }
}
