// robotex_core/src/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// --- Core Identifier ---
/// The simulation's own persistent identifier for a game object.
/// A real sensor could never observe this value; it only feeds the
/// identity stabilizer and debug tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    // A convenience method for use in the Bevy adapter crate.
    #[cfg(feature = "bevy")] // This will only compile if the "bevy" feature is enabled
    pub fn from_entity(entity: bevy_ecs::prelude::Entity) -> Self {
        Self(entity.to_bits())
    }
}

/// A sensor-assigned ball identifier, see [`crate::tracking::IdentityStabilizer`].
///
/// 64 bits wide so the never-reused counter cannot wrap in practice.
pub type VirtualId = u64;

/// The two teams' sides of the field. Each side owns exactly one goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Yellow,
    Blue,
}

impl Side {
    /// Both sides, in the order the camera scans their goals.
    pub const ALL: [Side; 2] = [Side::Yellow, Side::Blue];

    /// Name of this side's goal, used in error and log messages.
    pub fn goal_name(self) -> &'static str {
        match self {
            Side::Yellow => "yellow goal",
            Side::Blue => "blue goal",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Yellow => write!(f, "yellow"),
            Side::Blue => write!(f, "blue"),
        }
    }
}
