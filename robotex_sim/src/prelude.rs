// robotex_sim/src/prelude.rs

// Re-export the entire Bevy prelude for convenience.
pub use bevy::prelude::*;

// Re-export the robotex_core prelude so pure types like `ObjectId`,
// `CameraSensor` or `SceneRegistry` are at hand.
pub use robotex_core::prelude::*;

// Re-export common simulation-specific types for easy access in other plugins.
pub use crate::simulation::config::{
    BallsConfig, CameraConfig, FieldConfig, RobotConfig, ScenarioConfig, SimulationSettings,
};
pub use crate::simulation::core::app_state::SimulationSet;
pub use crate::simulation::core::components::{Ball, Goal, InPlay, PlanarPose, Robot, Velocity};
pub use crate::simulation::core::prng::SimulationRng;
pub use crate::simulation::plugins::sensors::camera::CameraRig;
