//! Configuration models for simulations and rosters.

pub mod sim;

pub use sim::{SimConfig, StaffingOrder, WorkerConfig};
