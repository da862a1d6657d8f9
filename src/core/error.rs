//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced by scheduler components.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// An assignment would break a staffing invariant: a worker pushed
    /// past its capacity, a worker double-assigned to one task, or a
    /// staffing batch of the wrong size. Unreachable under correct phase
    /// ordering; never retried.
    #[error("capacity violation: {0}")]
    CapacityViolation(String),
    /// Configuration rejected at initialization time.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
