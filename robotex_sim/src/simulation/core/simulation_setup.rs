// robotex_sim/src/simulation/core/simulation_setup.rs

use std::time::Duration;

use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::prelude::*;

pub struct SimulationSetupPlugin;

impl Plugin for SimulationSetupPlugin {
    fn build(&self, app: &mut App) {
        // This plugin's job is to read the config and add resources and systems.
        let config = app
            .world()
            .get_resource::<ScenarioConfig>()
            .expect("ScenarioConfig not found!")
            .clone();

        // --- 1. Add the Deterministic PRNG Resource ---
        let rng = match config.simulation.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut OsRng).expect("OS RNG failed"),
        };
        app.insert_resource(SimulationRng(rng));

        // --- 2. Fixed timestep shared by motion, camera and readout ---
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f64(
            1.0 / config.simulation.rate_hz,
        )));
        app.insert_resource(RunClock {
            limit: Duration::from_secs_f64(config.simulation.duration_seconds),
        });

        // Configure the runtime schedule graph.
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Motion,
                SimulationSet::Sensors,
                SimulationSet::Readout,
                SimulationSet::Lifecycle,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            stop_after_duration.in_set(SimulationSet::Lifecycle),
        );

        info!(
            "Simulation configured: {} Hz, {:.1} s, seed {:?}",
            config.simulation.rate_hz, config.simulation.duration_seconds, config.simulation.seed
        );
    }
}

/// How long the run lasts, in simulated time.
#[derive(Resource, Debug)]
pub struct RunClock {
    pub limit: Duration,
}

fn stop_after_duration(
    time: Res<Time>,
    clock: Res<RunClock>,
    mut exit: EventWriter<AppExit>,
    mut stopped: Local<bool>,
) {
    if *stopped || time.elapsed() < clock.limit {
        return;
    }
    info!(
        "Reached the configured duration ({:.1} s), stopping.",
        clock.limit.as_secs_f64()
    );
    exit.write(AppExit::Success);
    *stopped = true;
}
