//! Simulation and roster configuration structures.

use serde::{Deserialize, Serialize};

/// Candidate scan order used by the staffing phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingOrder {
    /// Fixed roster order: the deterministic tie-break. Default.
    Roster,
    /// Shuffle the scan order each step from a dedicated seed. An
    /// explicit opt-in: reproducible given the seed, but runs with
    /// different seeds diverge.
    Shuffled {
        /// Seed for the shuffle's own rng, independent of task
        /// generation.
        seed: u64,
    },
}

impl Default for StaffingOrder {
    fn default() -> Self {
        Self::Roster
    }
}

/// One worker entry: display label and task capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Human-readable name, kept for presentation only.
    pub label: String,
    /// Maximum simultaneous tasks. Must be at least 1.
    pub capacity: u32,
}

/// Root simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of tasks generated at initialization.
    pub task_count: usize,
    /// Allowed `resources_required` values, each equally likely.
    pub resource_choices: Vec<u32>,
    /// Inclusive `[low, high]` bounds for generated task durations.
    pub duration_range: (u32, u32),
    /// Workers in roster order.
    pub workers: Vec<WorkerConfig>,
    /// Staffing candidate scan order.
    #[serde(default)]
    pub staffing_order: StaffingOrder,
}

impl SimConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// A message describing the first rejected field: zero workers,
    /// non-positive capacity, empty or zero-valued resource choices, an
    /// inverted or zero duration range, or a resource requirement no
    /// worker combination can ever satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.workers.is_empty() {
            return Err("at least one worker must be defined".into());
        }
        for w in &self.workers {
            if w.capacity == 0 {
                return Err(format!("worker `{}` capacity must be greater than 0", w.label));
            }
        }
        if self.resource_choices.is_empty() {
            return Err("resource_choices must not be empty".into());
        }
        if self.resource_choices.iter().any(|&r| r == 0) {
            return Err("resource choices must be greater than 0".into());
        }
        let (low, high) = self.duration_range;
        if low == 0 || low > high {
            return Err(format!("duration_range [{low}, {high}] must satisfy 1 <= low <= high"));
        }
        // A task needs `resources_required` distinct workers at once, so
        // the roster size bounds satisfiability; the capacity sum is a
        // weaker bound kept for clarity of the error.
        let max_choice = self.resource_choices.iter().copied().max().unwrap_or(0);
        let total_capacity: u64 = self.workers.iter().map(|w| u64::from(w.capacity)).sum();
        if u64::from(max_choice) > total_capacity {
            return Err(format!(
                "resource requirement {max_choice} exceeds total capacity {total_capacity}"
            ));
        }
        if max_choice as usize > self.workers.len() {
            return Err(format!(
                "resource requirement {max_choice} exceeds roster size {}",
                self.workers.len()
            ));
        }
        Ok(())
    }

    /// Parse simulation configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// A parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
