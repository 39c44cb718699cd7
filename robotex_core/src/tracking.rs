// robotex_core/src/tracking.rs

use crate::messages::BallSighting;
use crate::types::{ObjectId, VirtualId};
use std::collections::HashMap;

/// Internal id → virtual id, as assigned during the previous tick.
pub type AssignmentTable = HashMap<ObjectId, VirtualId>;

/// Hands out virtual ball ids the way a real vision pipeline could.
///
/// A ball keeps its virtual id for as long as it stays continuously in view.
/// A ball that was not seen on the previous tick gets a brand-new id, even if
/// it was seen before: the camera has no way to re-identify it. The counter
/// lives as long as the stabilizer and ids are never reused.
#[derive(Debug, Clone, Default)]
pub struct IdentityStabilizer {
    next_id: VirtualId,
}

impl IdentityStabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next newly-seen ball will receive.
    pub fn next_id(&self) -> VirtualId {
        self.next_id
    }

    /// Builds the lookup table from the previous tick's sightings.
    pub fn previous_table(balls: &[BallSighting]) -> AssignmentTable {
        balls
            .iter()
            .map(|ball| (ball.debug_object_id(), ball.id))
            .collect()
    }

    /// Reuses the previous id of `object`, or allocates a fresh one.
    pub fn resolve(&mut self, previous: &AssignmentTable, object: ObjectId) -> VirtualId {
        if let Some(&id) = previous.get(&object) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Resolves a whole tick, in the order the objects are given.
    pub fn assign<I>(&mut self, previous: &AssignmentTable, current: I) -> Vec<VirtualId>
    where
        I: IntoIterator<Item = ObjectId>,
    {
        current
            .into_iter()
            .map(|object| self.resolve(previous, object))
            .collect()
    }
}
