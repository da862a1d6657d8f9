//! Worker records and the fixed roster.

use crate::core::task::TaskId;

/// Stable worker identifier: the worker's index in roster order.
///
/// Roster order is fixed at initialization and doubles as the
/// deterministic staffing tie-break (earliest-listed worker wins).
pub type WorkerId = u32;

/// A capacity-bounded worker.
///
/// A worker's assignment list only ever references tasks whose own
/// staffing record names this worker; the registry keeps the relation
/// symmetric by mutating both sides atomically.
#[derive(Debug, Clone)]
pub struct Worker {
    id: WorkerId,
    label: String,
    capacity: u32,
    current_tasks: Vec<TaskId>,
}

impl Worker {
    pub(crate) fn new(id: WorkerId, label: String, capacity: u32) -> Self {
        Self {
            id,
            label,
            capacity,
            current_tasks: Vec::with_capacity(capacity as usize),
        }
    }

    /// Roster-order identifier.
    #[must_use]
    pub const fn id(&self) -> WorkerId {
        self.id
    }

    /// Human-readable name from configuration, for presentation only.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Maximum number of tasks this worker can hold at once.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Tasks currently held, in assignment order. Never exceeds capacity.
    #[must_use]
    pub fn current_tasks(&self) -> &[TaskId] {
        &self.current_tasks
    }

    /// Whether the worker can take one more task.
    #[must_use]
    pub fn has_spare_capacity(&self) -> bool {
        self.current_tasks.len() < self.capacity as usize
    }

    pub(crate) fn push_task(&mut self, task: TaskId) {
        self.current_tasks.push(task);
    }

    pub(crate) fn remove_task(&mut self, task: TaskId) {
        self.current_tasks.retain(|t| *t != task);
    }
}

/// The fixed, ordered pool of workers.
///
/// Owns all worker records. Created once from configuration; workers are
/// never added or removed afterwards.
#[derive(Debug, Clone)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    /// Build a roster from `(label, capacity)` pairs in the given order.
    pub(crate) fn new(configs: impl IntoIterator<Item = (String, u32)>) -> Self {
        let workers = configs
            .into_iter()
            .enumerate()
            .map(|(idx, (label, capacity))| {
                #[allow(clippy::cast_possible_truncation)]
                Worker::new(idx as WorkerId, label, capacity)
            })
            .collect();
        Self { workers }
    }

    /// Number of workers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the roster is empty. Rejected at build time, so `false`
    /// for any roster produced by the builder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Look up a worker by id.
    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id as usize)
    }

    /// Iterate workers in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Total capacity across the roster.
    #[must_use]
    pub fn total_capacity(&self) -> u64 {
        self.workers.iter().map(|w| u64::from(w.capacity)).sum()
    }

    pub(crate) fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        self.workers.get_mut(id as usize)
    }

    /// Worker ids in roster order; the staffing phase filters these.
    #[allow(clippy::cast_possible_truncation)]
    pub fn ids(&self) -> impl Iterator<Item = WorkerId> + '_ {
        0..self.workers.len() as WorkerId
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Worker;
    type IntoIter = std::slice::Iter<'a, Worker>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter()
    }
}
