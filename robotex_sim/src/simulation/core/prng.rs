// robotex_sim/src/simulation/core/prng.rs

use bevy::prelude::Resource;
use rand_chacha::ChaCha8Rng;

/// The simulation's single deterministic PRNG, seeded from the scenario.
#[derive(Resource)]
pub struct SimulationRng(pub ChaCha8Rng);
