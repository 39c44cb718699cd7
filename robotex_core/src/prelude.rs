// robotex_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::abstractions::{BallState, CarrierBody, GoalState, ObjectRegistry, Steppable};
pub use crate::errors::VisionError;
pub use crate::paint::{Canvas, Paintable, TextCanvas};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::feed::PerceptionFeed;
pub use crate::geometry::{point_in_polygon, world_transform, Polygon2};
pub use crate::messages::{BallSighting, GoalSighting, PerceptionSnapshot};
pub use crate::registry::SceneRegistry;
pub use crate::types::{ObjectId, Side, VirtualId};

// --- Sensor Implementations ---
pub use crate::models::perception::field_of_view::FieldOfView;
pub use crate::sensors::camera::{Camera, CameraBuilder, CameraSensor, SensorMount};
pub use crate::tracking::IdentityStabilizer;
