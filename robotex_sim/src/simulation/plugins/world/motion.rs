// robotex_sim/src/simulation/plugins/world/motion.rs

//! Minimal kinematics standing in for a physics engine: balls roll with
//! linear damping and bounce off the walls, the robot spins in place.

use nalgebra::{Point2, UnitComplex, Vector2};

use crate::prelude::*;

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (ball_motion_system, robot_motion_system).in_set(SimulationSet::Motion),
        );
    }
}

/// Advances one ball by `dt`. Returns the new position and velocity.
pub fn roll_ball(
    position: Point2<f64>,
    velocity: Vector2<f64>,
    dt: f64,
    damping: f64,
    half_extents: (f64, f64),
    radius: f64,
) -> (Point2<f64>, Vector2<f64>) {
    let mut velocity = velocity * (1.0 - damping * dt).max(0.0);
    let mut position = position + velocity * dt;

    let limits = [
        (half_extents.0 - radius).max(0.0),
        (half_extents.1 - radius).max(0.0),
    ];
    for axis in 0..2 {
        let limit = limits[axis];
        if position[axis] > limit {
            position[axis] = 2.0 * limit - position[axis];
            velocity[axis] = -velocity[axis].abs();
        } else if position[axis] < -limit {
            position[axis] = -2.0 * limit - position[axis];
            velocity[axis] = velocity[axis].abs();
        }
        // A very fast ball could overshoot past the opposite wall.
        position[axis] = position[axis].clamp(-limit, limit);
    }
    (position, velocity)
}

/// True when `position` is within `capture_radius` of any goal point.
pub fn is_captured(position: &Point2<f64>, goals: &[Point2<f64>], capture_radius: f64) -> bool {
    goals
        .iter()
        .any(|goal| (position - goal).norm() <= capture_radius)
}

fn ball_motion_system(
    time: Res<Time>,
    config: Res<ScenarioConfig>,
    mut balls: Query<(&Name, &mut PlanarPose, &mut Velocity, &mut InPlay), With<Ball>>,
    goals: Query<&PlanarPose, (With<Goal>, Without<Ball>)>,
) {
    let dt = time.delta_secs_f64();
    let goal_points: Vec<Point2<f64>> = goals.iter().map(PlanarPose::position).collect();
    let half_extents = config.field.half_extents();

    for (name, mut pose, mut velocity, mut in_play) in &mut balls {
        if !in_play.0 {
            continue;
        }
        let (position, new_velocity) = roll_ball(
            pose.position(),
            velocity.0,
            dt,
            config.balls.damping,
            half_extents,
            config.balls.radius,
        );
        pose.0.translation.vector = position.coords;
        velocity.0 = new_velocity;

        if is_captured(&position, &goal_points, config.balls.goal_capture_radius) {
            in_play.0 = false;
            velocity.0 = Vector2::zeros();
            info!("{} went into a goal and is out of play", name.as_str());
        }
    }
}

fn robot_motion_system(time: Res<Time>, mut robots: Query<(&Robot, &mut PlanarPose)>) {
    let dt = time.delta_secs_f64();
    for (robot, mut pose) in &mut robots {
        if robot.turn_rate != 0.0 {
            pose.0.rotation *= UnitComplex::new(robot.turn_rate * dt);
        }
    }
}
