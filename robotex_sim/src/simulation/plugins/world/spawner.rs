// robotex_sim/src/simulation/plugins/world/spawner.rs

use std::f64::consts::TAU;

use nalgebra::{Isometry2, Point2, Vector2};
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

pub struct WorldSpawnerPlugin;

impl Plugin for WorldSpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_goals, spawn_robot, spawn_balls));
    }
}

/// Everything a rolling ball needs, ready to be spawned.
pub fn ball_bundle(index: usize, position: Point2<f64>, velocity: Vector2<f64>) -> impl Bundle {
    (
        Name::new(format!("Ball {}", index)),
        Ball,
        InPlay(true),
        PlanarPose(Isometry2::translation(position.x, position.y)),
        Velocity(velocity),
    )
}

fn spawn_goals(mut commands: Commands, config: Res<ScenarioConfig>) {
    for side in Side::ALL {
        let [x, y] = config.field.goal_position(side);
        info!("[SPAWN] {} at ({:.2}, {:.2})", side.goal_name(), x, y);
        commands.spawn((
            Name::new(side.goal_name()),
            Goal { side },
            PlanarPose::at(x, y),
        ));
    }
}

fn spawn_robot(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    mut exit: EventWriter<AppExit>,
) {
    let robot = &config.robot;
    let pose = Isometry2::new(
        Vector2::new(robot.x, robot.y),
        robot.heading_deg.to_radians(),
    );

    let mut entity = commands.spawn((
        Name::new("Robot"),
        Robot {
            turn_rate: robot.turn_rate_deg.to_radians(),
        },
        PlanarPose(pose),
    ));
    info!(
        "[SPAWN] Robot at ({:.2}, {:.2}) heading {:.1} deg",
        robot.x, robot.y, robot.heading_deg
    );

    match CameraRig::from_config(&robot.camera) {
        Ok(rig) => {
            info!(
                "  -> Mounting camera: offset {:?}, angle {} deg, view {} deg, range {} m",
                robot.camera.offset,
                robot.camera.angle_deg,
                robot.camera.angle_of_view_deg,
                robot.camera.range
            );
            entity.insert(rig);
        }
        // Only reachable when the scenario bypassed `load_scenario`.
        Err(e) => {
            error!("Robot camera could not be mounted: {}", e);
            exit.write(AppExit::error());
        }
    }
}

fn spawn_balls(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    mut rng: ResMut<SimulationRng>,
) {
    let (half_w, half_h) = config.field.half_extents();
    let radius = config.balls.radius;
    // Keep spawned balls fully on the field.
    let x_dist = Uniform::new_inclusive(-(half_w - radius).max(0.0), (half_w - radius).max(0.0));
    let y_dist = Uniform::new_inclusive(-(half_h - radius).max(0.0), (half_h - radius).max(0.0));
    let speed_dist = Uniform::new_inclusive(0.0, config.balls.max_speed);
    let heading_dist = Uniform::new(0.0, TAU);

    for index in 0..config.balls.count {
        let position = Point2::new(x_dist.sample(&mut rng.0), y_dist.sample(&mut rng.0));
        let speed = speed_dist.sample(&mut rng.0);
        let heading = heading_dist.sample(&mut rng.0);
        let velocity = Vector2::new(heading.cos(), heading.sin()) * speed;
        commands.spawn(ball_bundle(index, position, velocity));
    }
    info!("[SPAWN] Scattered {} balls", config.balls.count);
}
