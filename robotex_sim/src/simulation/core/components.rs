// robotex_sim/src/simulation/core/components.rs

use bevy::prelude::Component;
use nalgebra::{Isometry2, Point2, Vector2};
use robotex_core::types::Side;

/// Planar world pose of an entity. Body frames follow the core's convention:
/// the forward axis is local -Y.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlanarPose(pub Isometry2<f64>);

impl PlanarPose {
    pub fn at(x: f64, y: f64) -> Self {
        Self(Isometry2::translation(x, y))
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::from(self.0.translation.vector)
    }
}

/// Linear velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vector2<f64>);

/// The robot carrying the camera.
#[derive(Component, Debug)]
pub struct Robot {
    /// Constant turn rate in radians per second.
    pub turn_rate: f64,
}

#[derive(Component, Debug)]
pub struct Ball;

/// Whether a ball still takes part in the game. Balls that were scored stay
/// in the world but are no longer visible to the camera.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InPlay(pub bool);

#[derive(Component, Debug)]
pub struct Goal {
    pub side: Side,
}
