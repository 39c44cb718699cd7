// robotex_sim/src/lib.rs

use bevy::prelude::*;

// Import the plugins defined within the simulation crate.
use crate::simulation::core::simulation_setup::SimulationSetupPlugin;
use crate::simulation::plugins::debugging::readout::PerceptionReadoutPlugin;
use crate::simulation::plugins::sensors::camera::CameraPlugin;
use crate::simulation::plugins::world::motion::MotionPlugin;
use crate::simulation::plugins::world::spawner::WorldSpawnerPlugin;

// This prelude is for convenience for other files WITHIN the robotex_sim crate.
pub mod prelude;

// This module contains all the simulation-specific logic.
pub mod cli;
pub mod simulation;

/// The main plugin that brings together all the simulation parts.
///
/// Expects a [`simulation::config::ScenarioConfig`] resource to be inserted
/// before it is added.
pub struct RobotexSimulationPlugin;

impl Plugin for RobotexSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            // Fixed timestep, PRNG, system ordering, run duration.
            SimulationSetupPlugin,
            // Spawns the robot, the balls and both goals.
            WorldSpawnerPlugin,
            // Stands in for the physics engine: rolls balls, turns the robot.
            MotionPlugin,
            // The on-robot camera.
            CameraPlugin,
            // Periodic consumer of the published perception.
            PerceptionReadoutPlugin,
        ));
    }
}
