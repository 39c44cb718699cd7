use bevy::prelude::Resource;
use clap::Parser;
use std::path::PathBuf;

use crate::simulation::config::ScenarioOverrides;

/// Robotex: a headless robot-soccer camera simulator.
///
/// Runs a scenario and periodically logs what the robot's camera reports.
#[derive(Parser, Debug, Resource, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/default.toml")]
    pub scenario: PathBuf,

    /// Override the scenario's PRNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the scenario's run duration, in seconds.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Print the fully resolved scenario as TOML and exit.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

impl Cli {
    pub fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            seed: self.seed,
            duration_seconds: self.duration,
        }
    }
}
