// robotex_core/src/registry.rs

use crate::abstractions::{BallState, GoalState, ObjectRegistry};
use crate::types::{ObjectId, Side};
use nalgebra::Point2;

/// A plain, owned [`ObjectRegistry`]: a list of balls and up to one goal per side.
///
/// Engine adapters fill one of these from their own world state each tick;
/// wrap it in a `parking_lot::RwLock` to share a mutable scene with a
/// [`crate::sensors::camera::Camera`].
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    balls: Vec<BallState>,
    yellow_goal: Option<GoalState>,
    blue_goal: Option<GoalState>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that places both goals.
    pub fn with_goals(mut self, yellow: Point2<f64>, blue: Point2<f64>) -> Self {
        self.set_goal(Side::Yellow, yellow);
        self.set_goal(Side::Blue, blue);
        self
    }

    pub fn set_goal(&mut self, side: Side, position: Point2<f64>) {
        let goal = Some(GoalState { side, position });
        match side {
            Side::Yellow => self.yellow_goal = goal,
            Side::Blue => self.blue_goal = goal,
        }
    }

    pub fn remove_goal(&mut self, side: Side) {
        match side {
            Side::Yellow => self.yellow_goal = None,
            Side::Blue => self.blue_goal = None,
        }
    }

    /// Adds a ball or, if `id` is already known, moves it.
    pub fn upsert_ball(&mut self, id: ObjectId, position: Point2<f64>, active: bool) {
        match self.balls.iter_mut().find(|b| b.id == id) {
            Some(ball) => {
                ball.position = position;
                ball.active = active;
            }
            None => self.balls.push(BallState {
                id,
                position,
                active,
            }),
        }
    }

    pub fn remove_ball(&mut self, id: ObjectId) {
        self.balls.retain(|b| b.id != id);
    }

    pub fn clear_balls(&mut self) {
        self.balls.clear();
    }
}

impl ObjectRegistry for SceneRegistry {
    fn balls(&self) -> Vec<BallState> {
        self.balls.clone()
    }

    fn goal(&self, side: Side) -> Option<GoalState> {
        match side {
            Side::Yellow => self.yellow_goal,
            Side::Blue => self.blue_goal,
        }
    }
}
