// robotex_sim/src/main.rs

//! Headless runner for the Robotex camera simulation.
//!
//! `cargo run -p robotex_sim -- --scenario assets/scenarios/default.toml --seed 7`

use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use clap::Parser;

use robotex_sim::cli::Cli;
use robotex_sim::simulation::config::load_scenario;
use robotex_sim::RobotexSimulationPlugin;

fn main() -> AppExit {
    let cli = Cli::parse();

    // --- 1. Load Simulation Configuration ---
    // Logging is not up yet, so problems go straight to stderr.
    let config = match load_scenario(&cli.scenario, &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Could not load scenario '{}': {}",
                cli.scenario.display(),
                e
            );
            return AppExit::error();
        }
    };

    if cli.print_config {
        match toml::to_string_pretty(&config) {
            Ok(text) => {
                println!("{}", text);
                return AppExit::Success;
            }
            Err(e) => {
                eprintln!("Could not serialize scenario: {}", e);
                return AppExit::error();
            }
        }
    }

    let frame_period = Duration::from_secs_f64(1.0 / config.simulation.rate_hz);
    let mut app = App::new();

    // --- 2. Add Core Bevy Plugins & Resources ---
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame_period)))
        .add_plugins(LogPlugin {
            level: bevy::log::Level::INFO,
            filter: "info,robotex_sim=debug,robotex_core=debug".to_string(),
            ..default()
        })
        // Insert the loaded configuration as a Bevy resource so all systems can access it.
        .insert_resource(config)
        .insert_resource(cli);

    // --- 3. Add the Main Simulation Plugin ---
    app.add_plugins(RobotexSimulationPlugin);

    // --- 4. Run the App ---
    info!("Starting Robotex simulation...");
    app.run()
}
