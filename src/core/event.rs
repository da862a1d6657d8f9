//! Step-scoped scheduler events.

use serde::{Deserialize, Serialize};

use crate::core::roster::WorkerId;
use crate::core::task::TaskId;

/// One observation emitted by the scheduler loop during a step.
///
/// The loop performs no console output and no persistence; reporters
/// subscribe to this stream and own all display, logging, and
/// serialization concerns. Event order within a step is deterministic:
/// `Assigned` events in task-id order, then `Progress` events in roster
/// order, then `Completed` events in task-id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    /// A pending task was fully staffed this step.
    Assigned {
        /// Task that got staffed.
        task: TaskId,
        /// The committed workers, in roster order.
        workers: Vec<WorkerId>,
    },
    /// A worker was observed holding a task before progress was applied.
    Progress {
        /// Observing worker.
        worker: WorkerId,
        /// Task being worked.
        task: TaskId,
        /// Remaining duration before this step's decrement.
        remaining_before: u32,
    },
    /// A task's duration reached zero this step.
    Completed {
        /// The finished task.
        task: TaskId,
    },
}
