// robotex_sim/src/simulation/core/app_state.rs

use bevy::ecs::schedule::SystemSet;

/// The per-step data flow inside `FixedUpdate`. The sets run chained, in
/// declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Stand-in physics: integrate ball and robot motion.
    Motion,
    /// Sensors read the freshly moved world and publish their snapshots.
    Sensors,
    /// Consumers of published sensor data (logging, debug painting).
    Readout,
    /// Run bookkeeping such as stopping after the configured duration.
    Lifecycle,
}
