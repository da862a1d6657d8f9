//! Task registry: backlog ownership and invariant-preserving mutators.
//!
//! The registry owns every task record and is the only place the
//! task/worker assignment relation is mutated, so both sides always stay
//! symmetric: a worker appears in a task's staffing record iff the task
//! appears in that worker's assignment list.

use crate::core::error::SchedulerError;
use crate::core::roster::{Roster, WorkerId};
use crate::core::task::{Task, TaskId};

/// The backlog of tasks and their staffing/progress state.
///
/// Pure bookkeeping: the registry has no scheduling policy of its own.
/// The scheduler loop drives it through the four operations below.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Build a registry from pre-generated tasks. Used by the builder;
    /// task ids must equal their index in creation order.
    pub(crate) const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Number of tasks in the backlog, completed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(usize::try_from(id).ok()?)
    }

    /// Iterate all tasks in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Lazy view of tasks still waiting for staffing, in creation order
    /// (id ascending). Recomputed on every call, never cached.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|t| !t.is_completed() && !t.is_fully_staffed())
    }

    /// True iff every task has completed.
    #[must_use]
    pub fn is_backlog_exhausted(&self) -> bool {
        self.tasks.iter().all(Task::is_completed)
    }

    /// Commit a staffing batch: append `workers` to the task's staffing
    /// record and the task to each worker's assignment list.
    ///
    /// The batch must exactly cover the task's outstanding requirement.
    /// Nothing is mutated on failure.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::CapacityViolation`] if the batch size is wrong,
    /// a worker id is unknown, a worker is already on the task, or any
    /// worker would exceed its capacity.
    pub fn record_assignment(
        &mut self,
        roster: &mut Roster,
        task_id: TaskId,
        workers: &[WorkerId],
    ) -> Result<(), SchedulerError> {
        let task = self
            .tasks
            .get(usize::try_from(task_id).unwrap_or(usize::MAX))
            .ok_or_else(|| SchedulerError::CapacityViolation(format!("unknown task {task_id}")))?;

        let needed = task.resources_required() as usize - task.assigned_workers().len();
        if workers.len() != needed {
            return Err(SchedulerError::CapacityViolation(format!(
                "task {task_id} needs {needed} workers, got {}",
                workers.len()
            )));
        }

        // Validate the whole batch before touching either side.
        for &wid in workers {
            let worker = roster.worker(wid).ok_or_else(|| {
                SchedulerError::CapacityViolation(format!("unknown worker {wid}"))
            })?;
            if task.has_worker(wid) || workers.iter().filter(|w| **w == wid).count() > 1 {
                return Err(SchedulerError::CapacityViolation(format!(
                    "worker {wid} double-assigned to task {task_id}"
                )));
            }
            if !worker.has_spare_capacity() {
                return Err(SchedulerError::CapacityViolation(format!(
                    "worker {wid} at capacity {}",
                    worker.capacity()
                )));
            }
        }

        let task = &mut self.tasks[task_id as usize];
        for &wid in workers {
            task.push_worker(wid);
            if let Some(worker) = roster.worker_mut(wid) {
                worker.push_task(task_id);
            }
        }
        tracing::debug!(task = task_id, workers = ?workers, "assignment recorded");
        Ok(())
    }

    /// Apply one tick of progress to a staffed, uncompleted task; returns
    /// true if the task just completed.
    ///
    /// Must be invoked at most once per task per step regardless of how
    /// many workers hold the task. Calling it on an unstaffed or completed
    /// task is a phase-ordering bug; debug builds assert, release builds
    /// leave the task untouched and return false.
    pub fn advance_progress(&mut self, task_id: TaskId) -> bool {
        let Some(task) = self.tasks.get_mut(usize::try_from(task_id).unwrap_or(usize::MAX)) else {
            debug_assert!(false, "advance_progress on unknown task {task_id}");
            return false;
        };
        debug_assert!(
            task.is_fully_staffed() && !task.is_completed(),
            "advance_progress on task {task_id} outside staffed state"
        );
        if !task.is_fully_staffed() || task.is_completed() {
            return false;
        }
        let done = task.tick();
        if done {
            tracing::info!(task = task_id, "task completed");
        }
        done
    }

    /// Retire completed tasks from one worker's assignment list, clearing
    /// the worker from each such task's staffing record symmetrically.
    ///
    /// Idempotent: whichever caller processes a completed task first
    /// empties its side; later calls find nothing to remove.
    pub fn retire_completed(&mut self, roster: &mut Roster, worker_id: WorkerId) {
        let Some(worker) = roster.worker_mut(worker_id) else {
            return;
        };
        let retired: Vec<TaskId> = worker
            .current_tasks()
            .iter()
            .copied()
            .filter(|&tid| {
                self.tasks
                    .get(tid as usize)
                    .is_some_and(Task::is_completed)
            })
            .collect();
        for tid in retired {
            worker.remove_task(tid);
            self.tasks[tid as usize].remove_worker(worker_id);
            tracing::debug!(task = tid, worker = worker_id, "retired completed task");
        }
    }
}
