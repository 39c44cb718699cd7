// robotex_core/src/messages.rs

use crate::types::{ObjectId, Side, VirtualId};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

// =========================================================================
// == Perception Records ==
// =========================================================================

/// A ball the camera saw during one tick.
///
/// `bearing` is the cosine of the angle between the carrying body's forward
/// axis and the direction to the ball (1.0 dead ahead). `azimuth` is the same
/// angle as a signed value in radians, counter-clockwise positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallSighting {
    #[serde(skip)]
    object: ObjectId,
    /// Sensor-assigned id, stable while the ball stays continuously in view.
    pub id: VirtualId,
    pub distance: f64,
    pub bearing: f64,
    pub azimuth: f64,
}

impl BallSighting {
    pub(crate) fn new(
        object: ObjectId,
        id: VirtualId,
        distance: f64,
        bearing: f64,
        azimuth: f64,
    ) -> Self {
        Self {
            object,
            id,
            distance,
            bearing,
            azimuth,
        }
    }

    /// The simulation's internal id of the ball.
    ///
    /// For debugging only: a real camera cannot tell which ball is which, so
    /// robot control logic must not depend on this value.
    pub fn debug_object_id(&self) -> ObjectId {
        self.object
    }
}

impl fmt::Display for BallSighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} - {}cm / {}°",
            self.id,
            (self.distance * 100.0).round(),
            self.azimuth.to_degrees().round()
        )
    }
}

/// A goal the camera saw during one tick. Goals need no virtual id: there is
/// one per side and the side itself is a stable discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalSighting {
    pub side: Side,
    pub distance: f64,
    pub bearing: f64,
    pub azimuth: f64,
}

impl fmt::Display for GoalSighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}cm / {}°",
            self.side.goal_name(),
            (self.distance * 100.0).round(),
            self.azimuth.to_degrees().round()
        )
    }
}

// =========================================================================
// == Published Snapshot ==
// =========================================================================

/// Everything one tick of the camera produced. Immutable once published;
/// each tick replaces the previous snapshot as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerceptionSnapshot {
    /// Number of completed camera ticks, 0 before the first one.
    pub tick: u64,
    pub balls: Arc<[BallSighting]>,
    pub goals: Arc<[GoalSighting]>,
}

impl PerceptionSnapshot {
    pub fn new(tick: u64, balls: Vec<BallSighting>, goals: Vec<GoalSighting>) -> Self {
        Self {
            tick,
            balls: balls.into(),
            goals: goals.into(),
        }
    }

    pub fn ball(&self, id: VirtualId) -> Option<&BallSighting> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn goal(&self, side: Side) -> Option<&GoalSighting> {
        self.goals.iter().find(|g| g.side == side)
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty() && self.goals.is_empty()
    }
}

impl Default for PerceptionSnapshot {
    fn default() -> Self {
        Self::new(0, Vec::new(), Vec::new())
    }
}
