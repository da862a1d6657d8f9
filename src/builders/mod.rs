//! Builders to construct simulations from configuration.

pub mod sim_builder;

pub use sim_builder::{build_scenario, build_simulation};
