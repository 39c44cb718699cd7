// robotex_sim/src/simulation/core/mod.rs

pub mod app_state;
pub mod components;
pub mod prng;
pub mod simulation_setup;
