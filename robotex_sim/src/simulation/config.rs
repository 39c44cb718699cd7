// robotex_sim/src/simulation/config.rs

//! Scenario configuration: the TOML schema, its defaults, and loading with
//! `figment` (file, then `ROBOTEX_` environment variables, then CLI overrides).

use std::path::Path;

use bevy::prelude::*;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use robotex_core::models::perception::field_of_view::FieldOfView;
use robotex_core::types::Side;
use serde::{Deserialize, Serialize};

/// Top-level scenario. Every section is optional and falls back to defaults.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub simulation: SimulationSettings,
    pub field: FieldConfig,
    pub robot: RobotConfig,
    pub balls: BallsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    /// `None` seeds the PRNG from the OS.
    pub seed: Option<u64>,
    pub duration_seconds: f64,
    /// Fixed step rate of the whole simulation, camera included.
    pub rate_hz: f64,
    pub readout_period_seconds: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            duration_seconds: 30.0,
            rate_hz: 60.0,
            readout_period_seconds: 1.0,
        }
    }
}

/// The playing field is centered on the origin. Goals sit in the middle of
/// the two short walls: yellow at `-width / 2`, blue at `+width / 2`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 4.6,
            height: 3.1,
        }
    }
}

impl FieldConfig {
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn goal_position(&self, side: Side) -> [f64; 2] {
        match side {
            Side::Yellow => [-self.width / 2.0, 0.0],
            Side::Blue => [self.width / 2.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RobotConfig {
    pub x: f64,
    pub y: f64,
    /// Counter-clockwise rotation of the body. At 0 the robot faces world -Y.
    pub heading_deg: f64,
    pub turn_rate_deg: f64,
    pub camera: CameraConfig,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading_deg: 0.0,
            turn_rate_deg: 30.0,
            camera: CameraConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Mounting point in the robot's body frame.
    pub offset: [f64; 2],
    pub angle_deg: f64,
    pub angle_of_view_deg: f64,
    pub range: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, -0.1],
            angle_deg: 0.0,
            angle_of_view_deg: 60.0,
            range: 2.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BallsConfig {
    pub count: usize,
    /// Upper bound of the random initial speed, m/s.
    pub max_speed: f64,
    /// Linear damping, 1/s.
    pub damping: f64,
    /// Golf ball radius in meters.
    pub radius: f64,
    pub goal_capture_radius: f64,
}

impl Default for BallsConfig {
    fn default() -> Self {
        Self {
            count: 11,
            max_speed: 1.0,
            damping: 0.5,
            radius: 0.04267,
            goal_capture_radius: 0.2,
        }
    }
}

/// Values given on the command line. They win over both the file and the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct ScenarioOverrides {
    pub seed: Option<u64>,
    pub duration_seconds: Option<f64>,
}

/// The layered source of a scenario, before extraction.
pub fn scenario_figment(path: &Path, overrides: &ScenarioOverrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(ScenarioConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ROBOTEX_").split("__"));

    if let Some(seed) = overrides.seed {
        figment = figment.merge(Serialized::default("simulation.seed", seed));
    }
    if let Some(duration) = overrides.duration_seconds {
        figment = figment.merge(Serialized::default("simulation.duration_seconds", duration));
    }
    figment
}

/// Loads and validates a scenario. A missing file is not an error: the
/// defaults (plus environment and overrides) are used instead.
pub fn load_scenario(
    path: &Path,
    overrides: &ScenarioOverrides,
) -> Result<ScenarioConfig, figment::Error> {
    let config: ScenarioConfig = scenario_figment(path, overrides).extract()?;
    config.validate()?;
    Ok(config)
}

impl ScenarioConfig {
    /// Parses a scenario from TOML text, without environment or overrides.
    pub fn from_toml_str(source: &str) -> Result<Self, figment::Error> {
        let config: ScenarioConfig = Figment::from(Serialized::defaults(ScenarioConfig::default()))
            .merge(Toml::string(source))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values the simulation divides by or builds distributions
    /// from, and that the camera geometry would be accepted by the sensor.
    pub fn validate(&self) -> Result<(), figment::Error> {
        let positive = [
            ("simulation.rate_hz", self.simulation.rate_hz),
            ("simulation.readout_period_seconds", self.simulation.readout_period_seconds),
            ("field.width", self.field.width),
            ("field.height", self.field.height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(figment::Error::from(format!(
                    "`{}` must be a positive number, got {}",
                    name, value
                )));
            }
        }
        let non_negative = [
            ("simulation.duration_seconds", self.simulation.duration_seconds),
            ("balls.max_speed", self.balls.max_speed),
            ("balls.damping", self.balls.damping),
            ("balls.radius", self.balls.radius),
            ("balls.goal_capture_radius", self.balls.goal_capture_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(figment::Error::from(format!(
                    "`{}` must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        let camera = &self.robot.camera;
        FieldOfView::new(camera.angle_deg, camera.angle_of_view_deg, camera.range).map_err(
            |e| figment::Error::from(format!("`robot.camera` is not a valid camera: {}", e)),
        )?;
        Ok(())
    }
}
