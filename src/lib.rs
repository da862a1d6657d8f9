//! # Coop Scheduler
//!
//! A deterministic, resource-constrained cooperative task scheduler.
//!
//! This library simulates a fixed pool of capacity-bounded workers that
//! repeatedly claims, jointly executes, and retires a backlog of
//! multi-resource tasks over discrete simulation steps.
//!
//! ## Core Model
//!
//! - **Tasks** require a fixed number of resource units and a duration in
//!   ticks. A task needing `k` units must be staffed by `k` distinct
//!   workers *simultaneously* before it makes any progress.
//! - **Workers** have a fixed capacity: the maximum number of tasks they
//!   can hold at once. Workers never move, spawn, or die.
//! - **Steps** advance simulated time. Each step runs four ordered phases:
//!   staffing, reporting, progress, and cleanup.
//!
//! ## Key Invariants
//!
//! - **All-or-nothing staffing**: a task is either fully staffed or has no
//!   assigned workers; partial staffing never survives a step boundary.
//! - **Capacity limits**: no worker ever holds more tasks than its
//!   capacity.
//! - **Single decrement**: a staffed task loses exactly one unit of
//!   remaining duration per step, no matter how many workers cooperate on
//!   it. Cooperation raises backlog throughput, not per-task speed.
//! - **Deterministic tie-breaks**: staffing scans workers in fixed roster
//!   order, so equal seeds produce identical event streams.
//!
//! ## Example
//!
//! ```rust,ignore
//! use coop_scheduler::builders::build_simulation;
//! use coop_scheduler::config::SimConfig;
//! use coop_scheduler::core::InMemorySink;
//!
//! let cfg = SimConfig::from_json_str(input)?;
//! let mut sim = build_simulation(&cfg, 42)?;
//!
//! let mut sink = InMemorySink::new(10_000);
//! let summary = sim.run(200, &mut sink)?;
//! assert!(summary.exhausted);
//! ```
//!
//! The scheduler core performs no console output and no persistence: it
//! emits a typed [`core::StepEvent`] stream per step, and reporting sinks
//! (see [`core::report`]) are solely responsible for display or
//! serialization.
//!
//! For complete examples, see:
//! - `tests/scheduler_loop_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling model: registry, roster, step loop, events, sinks.
pub mod core;
/// Configuration models for simulations and rosters.
pub mod config;
/// Builders to construct simulations from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
