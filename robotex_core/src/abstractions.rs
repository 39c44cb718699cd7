// robotex_core/src/abstractions.rs

use crate::errors::VisionError;
use crate::types::{ObjectId, Side};
use nalgebra::{Isometry2, Point2, Vector2};
use parking_lot::RwLock;

/// The forward axis of every carrying body, in the body's own frame.
///
/// Body frames are screen-style (y grows "down"), so a body facing along its
/// heading looks down local -Y. The field-of-view wedge uses the same
/// convention through its -90° offset.
pub fn body_forward() -> Vector2<f64> {
    Vector2::new(0.0, -1.0)
}

// --- CARRYING BODY ---
/// The rigid body a sensor is mounted on. Implemented by the physics side.
pub trait CarrierBody: Send + Sync {
    /// Current world pose: translation is the body origin, rotation its orientation.
    fn pose(&self) -> Isometry2<f64>;

    /// Maps a point from the body frame into world coordinates.
    fn local_to_world(&self, local: &Point2<f64>) -> Point2<f64> {
        self.pose() * local
    }

    /// The body's forward unit vector in world coordinates.
    fn forward(&self) -> Vector2<f64> {
        self.pose().rotation * body_forward()
    }
}

impl CarrierBody for Isometry2<f64> {
    fn pose(&self) -> Isometry2<f64> {
        *self
    }
}

impl<T: CarrierBody> CarrierBody for RwLock<T> {
    fn pose(&self) -> Isometry2<f64> {
        self.read().pose()
    }
}

// --- OBJECT REGISTRY ---
/// A ball as the registry reports it for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub id: ObjectId,
    pub position: Point2<f64>,
    /// Inactive balls (e.g. removed from play) are invisible to the camera.
    pub active: bool,
}

/// A goal's reference point. Its physical extent is not modelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalState {
    pub side: Side,
    pub position: Point2<f64>,
}

/// The game's object registry: every ball plus exactly one goal per side.
pub trait ObjectRegistry: Send + Sync {
    /// All balls, in the registry's iteration order.
    fn balls(&self) -> Vec<BallState>;

    /// The goal of `side`, `None` only if the registry is misconfigured.
    fn goal(&self, side: Side) -> Option<GoalState>;
}

impl<T: ObjectRegistry> ObjectRegistry for RwLock<T> {
    fn balls(&self) -> Vec<BallState> {
        self.read().balls()
    }

    fn goal(&self, side: Side) -> Option<GoalState> {
        self.read().goal(side)
    }
}

// --- SCHEDULING ---
/// Anything an external scheduler advances once per simulation step.
pub trait Steppable {
    fn step(&mut self, dt: f64) -> Result<(), VisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn forward_follows_body_rotation() {
        let body = Isometry2::new(Vector2::new(1.0, 2.0), FRAC_PI_2);
        let forward = body.forward();
        assert_abs_diff_eq!(forward.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(forward.y, 0.0, epsilon = 1e-12);

        let world = body.local_to_world(&Point2::new(0.0, -1.0));
        assert_abs_diff_eq!(world.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(world.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn locked_body_reports_latest_pose() {
        let body: RwLock<Isometry2<f64>> = RwLock::new(Isometry2::identity());
        *body.write() = Isometry2::translation(3.0, 4.0);
        assert_abs_diff_eq!(body.pose().translation.x, 3.0);
        assert_abs_diff_eq!(body.pose().translation.y, 4.0);
    }
}
