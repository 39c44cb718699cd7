// robotex_sim/src/simulation/plugins/sensors/camera.rs

use nalgebra::Point2;

use crate::prelude::*;

// =========================================================================
// == Camera Component & Plugin ==
// =========================================================================

/// A Bevy component attached to the robot, owning its camera sensor.
///
/// The sensor's [`PerceptionFeed`] can be cloned out and handed to any
/// consumer, including ones living outside the ECS on other threads.
#[derive(Component)]
pub struct CameraRig {
    pub sensor: CameraSensor,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Result<Self, VisionError> {
        let fov = FieldOfView::new(config.angle_deg, config.angle_of_view_deg, config.range)?;
        let mount = SensorMount::new(config.offset[0], config.offset[1]);
        Ok(Self {
            sensor: CameraSensor::new(mount, fov),
        })
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            camera_sensor_system.in_set(SimulationSet::Sensors),
        );
    }
}

// =========================================================================
// == Runtime System ==
// =========================================================================

/// Mirrors the ECS world into a [`SceneRegistry`] and runs one camera tick
/// for every robot carrying a camera.
fn camera_sensor_system(
    mut cameras: Query<(&Name, &PlanarPose, &mut CameraRig)>,
    balls: Query<(Entity, &PlanarPose, &InPlay), With<Ball>>,
    goals: Query<(&Goal, &PlanarPose)>,
) {
    if cameras.is_empty() {
        return;
    }

    let mut scene = SceneRegistry::new();
    for (goal, pose) in &goals {
        scene.set_goal(goal.side, pose.position());
    }
    for (entity, pose, in_play) in &balls {
        let position: Point2<f64> = pose.position();
        scene.upsert_ball(ObjectId::from_entity(entity), position, in_play.0);
    }

    for (name, body_pose, mut rig) in &mut cameras {
        if let Err(e) = rig.sensor.observe(&body_pose.0, &scene) {
            error!("[{}] camera tick failed: {}", name.as_str(), e);
        }
    }
}
