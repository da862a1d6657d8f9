//! Core scheduling model: registry, roster, step loop, events, sinks.

pub mod error;
pub mod event;
pub mod registry;
pub mod report;
pub mod roster;
pub mod scheduler;
pub mod task;

pub use error::{AppResult, SchedulerError};
pub use event::StepEvent;
pub use registry::TaskRegistry;
pub use report::{EventSink, InMemorySink, JsonLineSink};
pub use roster::{Roster, Worker, WorkerId};
pub use scheduler::{step, RunSummary, Simulation};
pub use task::{Task, TaskId, TaskState};
