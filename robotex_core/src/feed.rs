// robotex_core/src/feed.rs

use crate::messages::{BallSighting, GoalSighting, PerceptionSnapshot};
use parking_lot::RwLock;
use std::sync::Arc;

/// The published perception state of one camera, shared between the
/// simulation thread (writer) and any number of consumers.
///
/// The writer builds a complete [`PerceptionSnapshot`] off-lock and swaps it
/// in under a short write lock. Readers clone the `Arc` and iterate it without
/// holding any lock, so they see either the whole previous tick or the whole
/// new one, and a snapshot they already hold never changes underneath them.
#[derive(Debug, Clone, Default)]
pub struct PerceptionFeed {
    current: Arc<RwLock<Arc<PerceptionSnapshot>>>,
}

impl PerceptionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<PerceptionSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn visible_balls(&self) -> Arc<[BallSighting]> {
        Arc::clone(&self.current.read().balls)
    }

    pub fn visible_goals(&self) -> Arc<[GoalSighting]> {
        Arc::clone(&self.current.read().goals)
    }

    /// Replaces the published snapshot and returns the new one.
    pub(crate) fn publish(&self, snapshot: PerceptionSnapshot) -> Arc<PerceptionSnapshot> {
        let next = Arc::new(snapshot);
        *self.current.write() = Arc::clone(&next);
        next
    }
}
