// robotex_core/src/sensors/camera.rs

use crate::abstractions::{body_forward, CarrierBody, GoalState, ObjectRegistry, Steppable};
use crate::errors::VisionError;
use crate::feed::PerceptionFeed;
use crate::geometry::{signed_angle, world_transform, Polygon2};
use crate::messages::{BallSighting, GoalSighting, PerceptionSnapshot};
use crate::models::perception::field_of_view::FieldOfView;
use crate::paint::{Canvas, Paintable};
use crate::tracking::IdentityStabilizer;
use crate::types::Side;
use nalgebra::{Isometry2, Point2, Rotation2, Vector2};
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

// =========================================================================
// == Mounting ==
// =========================================================================

/// Where the camera sits on its carrying body, in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorMount {
    pub offset: Vector2<f64>,
}

impl SensorMount {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            offset: Vector2::new(x, y),
        }
    }

    /// The sensor origin in the body frame.
    pub fn origin(&self) -> Point2<f64> {
        Point2::from(self.offset)
    }

    fn isometry(&self) -> Isometry2<f64> {
        Isometry2::translation(self.offset.x, self.offset.y)
    }
}

/// Distance and direction from the sensor origin to an observed point.
struct Reading {
    distance: f64,
    bearing: f64,
    azimuth: f64,
}

fn read_target(origin: &Point2<f64>, forward: &Vector2<f64>, target: &Point2<f64>) -> Reading {
    let offset = target - origin;
    let distance = offset.norm();
    match offset.try_normalize(0.0) {
        Some(heading) => Reading {
            distance,
            bearing: heading.dot(forward),
            azimuth: signed_angle(forward, &heading),
        },
        // Sitting on the apex: treat it as dead ahead.
        None => Reading {
            distance,
            bearing: 1.0,
            azimuth: 0.0,
        },
    }
}

// =========================================================================
// == Camera Sensor (per-tick logic) ==
// =========================================================================

/// The camera's perception logic, independent of where its collaborators live.
///
/// Engine adapters that already hold the body pose and object list for the
/// current tick call [`CameraSensor::observe`] directly. Code that wants the
/// camera to own its collaborators uses [`Camera`] instead.
#[derive(Debug)]
pub struct CameraSensor {
    mount: SensorMount,
    fov: FieldOfView,
    stabilizer: IdentityStabilizer,
    feed: PerceptionFeed,
    ticks: u64,
}

impl CameraSensor {
    pub fn new(mount: SensorMount, fov: FieldOfView) -> Self {
        Self {
            mount,
            fov,
            stabilizer: IdentityStabilizer::new(),
            feed: PerceptionFeed::new(),
            ticks: 0,
        }
    }

    /// Resets the sensor geometry, e.g. to simulate a different camera model.
    /// On error the previous geometry stays in effect.
    pub fn configure(
        &mut self,
        angle: f64,
        angle_of_view: f64,
        range: f64,
    ) -> Result<(), VisionError> {
        self.fov.configure(angle, angle_of_view, range)
    }

    pub fn mount(&self) -> &SensorMount {
        &self.mount
    }

    pub fn field_of_view(&self) -> &FieldOfView {
        &self.fov
    }

    /// A handle consumers on other threads can read from.
    pub fn feed(&self) -> PerceptionFeed {
        self.feed.clone()
    }

    pub fn snapshot(&self) -> Arc<PerceptionSnapshot> {
        self.feed.snapshot()
    }

    pub fn visible_balls(&self) -> Arc<[BallSighting]> {
        self.feed.visible_balls()
    }

    pub fn visible_goals(&self) -> Arc<[GoalSighting]> {
        self.feed.visible_goals()
    }

    /// The viewing wedge placed in the world for the body's current pose.
    pub fn world_wedge(&self, body: &dyn CarrierBody) -> Polygon2 {
        world_transform(self.fov.local_wedge(), &(body.pose() * self.mount.isometry()))
    }

    /// Runs one tick of perception and publishes the result.
    ///
    /// Both goals are looked up before anything else; if either is missing the
    /// tick fails with [`VisionError::MissingCollaborator`] and the previous
    /// snapshot stays published.
    pub fn observe(
        &mut self,
        body: &dyn CarrierBody,
        registry: &dyn ObjectRegistry,
    ) -> Result<Arc<PerceptionSnapshot>, VisionError> {
        let goal_states = Side::ALL
            .iter()
            .map(|&side| {
                registry.goal(side).ok_or_else(|| {
                    warn!(goal = side.goal_name(), "registry lost a goal, camera tick aborted");
                    VisionError::MissingCollaborator(side.goal_name())
                })
            })
            .collect::<Result<Vec<GoalState>, _>>()?;

        // Must be taken from the outgoing snapshot before it is replaced.
        let previous = IdentityStabilizer::previous_table(&self.feed.visible_balls());

        let wedge = self.world_wedge(body);
        let origin = body.local_to_world(&self.mount.origin());
        let forward = body.forward();

        let mut balls = Vec::new();
        for ball in registry.balls() {
            if !ball.active || !wedge.contains(ball.position.x, ball.position.y) {
                continue;
            }
            let reading = read_target(&origin, &forward, &ball.position);
            let id = self.stabilizer.resolve(&previous, ball.id);
            balls.push(BallSighting::new(
                ball.id,
                id,
                reading.distance,
                reading.bearing,
                reading.azimuth,
            ));
        }

        let goals: Vec<GoalSighting> = goal_states
            .into_iter()
            .filter(|goal| wedge.contains(goal.position.x, goal.position.y))
            .map(|goal| {
                let reading = read_target(&origin, &forward, &goal.position);
                GoalSighting {
                    side: goal.side,
                    distance: reading.distance,
                    bearing: reading.bearing,
                    azimuth: reading.azimuth,
                }
            })
            .collect();

        self.ticks += 1;
        trace!(
            tick = self.ticks,
            balls = balls.len(),
            goals = goals.len(),
            "camera tick"
        );
        Ok(self
            .feed
            .publish(PerceptionSnapshot::new(self.ticks, balls, goals)))
    }
}

impl Paintable for CameraSensor {
    /// Paints the wedge and one label per sighting, in the body frame.
    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_polygon(&world_transform(
            self.fov.local_wedge(),
            &self.mount.isometry(),
        ));

        let origin = self.mount.origin();
        let place = |distance: f64, azimuth: f64| {
            origin + Rotation2::new(azimuth) * body_forward() * distance
        };

        let snapshot = self.snapshot();
        for ball in snapshot.balls.iter() {
            canvas.label(place(ball.distance, ball.azimuth), &ball.to_string());
        }
        for goal in snapshot.goals.iter() {
            canvas.label(place(goal.distance, goal.azimuth), &goal.to_string());
        }
    }
}

// =========================================================================
// == Camera (sensor bound to its collaborators) ==
// =========================================================================

/// A [`CameraSensor`] that owns handles to its carrying body and the object
/// registry, so an external scheduler only needs to call [`Camera::tick`].
pub struct Camera {
    sensor: CameraSensor,
    body: Arc<dyn CarrierBody>,
    registry: Arc<dyn ObjectRegistry>,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// Advances the camera by one simulation step.
    ///
    /// The perception is instantaneous, so `dt` does not affect the result.
    pub fn tick(&mut self, _dt: f64) -> Result<Arc<PerceptionSnapshot>, VisionError> {
        self.sensor
            .observe(self.body.as_ref(), self.registry.as_ref())
    }

    pub fn configure(
        &mut self,
        angle: f64,
        angle_of_view: f64,
        range: f64,
    ) -> Result<(), VisionError> {
        self.sensor.configure(angle, angle_of_view, range)
    }

    pub fn sensor(&self) -> &CameraSensor {
        &self.sensor
    }

    pub fn feed(&self) -> PerceptionFeed {
        self.sensor.feed()
    }

    pub fn snapshot(&self) -> Arc<PerceptionSnapshot> {
        self.sensor.snapshot()
    }

    pub fn visible_balls(&self) -> Arc<[BallSighting]> {
        self.sensor.visible_balls()
    }

    pub fn visible_goals(&self) -> Arc<[GoalSighting]> {
        self.sensor.visible_goals()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("sensor", &self.sensor)
            .finish_non_exhaustive()
    }
}

impl Steppable for Camera {
    fn step(&mut self, dt: f64) -> Result<(), VisionError> {
        self.tick(dt).map(|_| ())
    }
}

impl Paintable for Camera {
    fn paint(&self, canvas: &mut dyn Canvas) {
        self.sensor.paint(canvas);
    }
}

/// Collects a camera's collaborators and geometry.
///
/// `build` refuses to create a camera without a carrying body, without a
/// registry, or with a registry that lacks either goal.
#[derive(Default)]
pub struct CameraBuilder {
    body: Option<Arc<dyn CarrierBody>>,
    registry: Option<Arc<dyn ObjectRegistry>>,
    mount: SensorMount,
    fov: Option<FieldOfView>,
}

impl CameraBuilder {
    pub fn body(mut self, body: Arc<dyn CarrierBody>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn registry(mut self, registry: Arc<dyn ObjectRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn mount(mut self, mount: SensorMount) -> Self {
        self.mount = mount;
        self
    }

    pub fn field_of_view(mut self, fov: FieldOfView) -> Self {
        self.fov = Some(fov);
        self
    }

    pub fn build(self) -> Result<Camera, VisionError> {
        let body = self
            .body
            .ok_or(VisionError::MissingCollaborator("carrying body"))?;
        let registry = self
            .registry
            .ok_or(VisionError::MissingCollaborator("object registry"))?;
        for side in Side::ALL {
            if registry.goal(side).is_none() {
                return Err(VisionError::MissingCollaborator(side.goal_name()));
            }
        }

        Ok(Camera {
            sensor: CameraSensor::new(self.mount, self.fov.unwrap_or_default()),
            body,
            registry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::TextCanvas;
    use crate::registry::SceneRegistry;
    use crate::types::ObjectId;
    use approx::assert_abs_diff_eq;
    use parking_lot::RwLock;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    /// Goals far behind the robot, out of view unless a test moves them.
    fn scene() -> SceneRegistry {
        SceneRegistry::new().with_goals(Point2::new(-50.0, 50.0), Point2::new(50.0, 50.0))
    }

    /// A point `distance` away from the identity body, rotated `angle` off the forward axis.
    fn ahead(distance: f64, angle: f64) -> Point2<f64> {
        Point2::from(Rotation2::new(angle) * body_forward() * distance)
    }

    fn origin_pose() -> Isometry2<f64> {
        Isometry2::identity()
    }

    fn sensor() -> CameraSensor {
        CameraSensor::new(SensorMount::default(), FieldOfView::new(0.0, 90.0, 2.0).unwrap())
    }

    struct Rig {
        camera: Camera,
        body: Arc<RwLock<Isometry2<f64>>>,
        scene: Arc<RwLock<SceneRegistry>>,
    }

    fn rig() -> Rig {
        let body: Arc<RwLock<Isometry2<f64>>> = Arc::new(RwLock::new(origin_pose()));
        let scene = Arc::new(RwLock::new(scene()));
        let camera = Camera::builder()
            .body(body.clone())
            .registry(scene.clone())
            .field_of_view(FieldOfView::new(0.0, 90.0, 2.0).unwrap())
            .build()
            .unwrap();
        Rig {
            camera,
            body,
            scene,
        }
    }

    #[test]
    fn ball_straight_ahead_is_seen_with_unit_bearing() {
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), ahead(1.0, 0.0), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();

        assert_eq!(snapshot.balls.len(), 1);
        let ball = &snapshot.balls[0];
        assert_eq!(ball.id, 0);
        assert_abs_diff_eq!(ball.distance, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ball.bearing, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ball.azimuth, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ball_outside_half_cone_is_not_seen() {
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), ahead(1.0, FRAC_PI_3), true);
        scene.upsert_ball(ObjectId(2), ahead(1.0, -FRAC_PI_3), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();
        assert!(snapshot.balls.is_empty());
    }

    #[test]
    fn off_axis_ball_reports_cosine_bearing_and_signed_azimuth() {
        let angle = 30f64.to_radians();
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), ahead(1.0, angle), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();
        let ball = &snapshot.balls[0];
        assert_abs_diff_eq!(ball.bearing, angle.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(ball.azimuth, angle, epsilon = 1e-12);
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let mut sensor = sensor();
        let corner = sensor.field_of_view().local_wedge().vertices()[2];

        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), corner, true);
        scene.upsert_ball(ObjectId(2), Point2::from(corner.coords * (1.0 + 1e-9)), true);

        let snapshot = sensor.observe(&origin_pose(), &scene).unwrap();
        assert_eq!(snapshot.balls.len(), 1);
        assert_eq!(snapshot.balls[0].debug_object_id(), ObjectId(1));
        assert_abs_diff_eq!(snapshot.balls[0].distance, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn inactive_balls_are_skipped() {
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), ahead(1.0, 0.0), false);
        scene.upsert_ball(ObjectId(2), ahead(1.2, 0.1), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();
        assert_eq!(snapshot.balls.len(), 1);
        assert_eq!(snapshot.balls[0].debug_object_id(), ObjectId(2));
        assert_eq!(snapshot.balls[0].id, 0);
    }

    #[test]
    fn wedge_follows_body_pose() {
        // Facing +X (rotated 90°) from (5, 5).
        let body = Isometry2::new(Vector2::new(5.0, 5.0), FRAC_PI_2);
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), Point2::new(6.0, 5.0), true);
        scene.upsert_ball(ObjectId(2), Point2::new(5.0, 4.0), true);

        let snapshot = sensor().observe(&body, &scene).unwrap();
        assert_eq!(snapshot.balls.len(), 1);
        let ball = &snapshot.balls[0];
        assert_eq!(ball.debug_object_id(), ObjectId(1));
        assert_abs_diff_eq!(ball.distance, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ball.bearing, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn mount_offset_moves_the_sensor_origin() {
        let mut sensor = CameraSensor::new(
            SensorMount::new(0.0, -0.5),
            FieldOfView::new(0.0, 90.0, 2.0).unwrap(),
        );
        let mut scene = scene();
        // 1.5 m ahead of the body origin is 1 m ahead of the camera.
        scene.upsert_ball(ObjectId(1), ahead(1.5, 0.0), true);
        // Beyond the wedge's depth from the body origin, within it from the camera.
        scene.upsert_ball(ObjectId(2), ahead(1.8, 0.0), true);

        let snapshot = sensor.observe(&origin_pose(), &scene).unwrap();
        let distances: Vec<f64> = snapshot.balls.iter().map(|b| b.distance).collect();
        assert_eq!(distances.len(), 2);
        assert_abs_diff_eq!(distances[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distances[1], 1.3, epsilon = 1e-12);
    }

    #[test]
    fn goals_in_view_are_reported_by_side() {
        let mut scene = SceneRegistry::new().with_goals(ahead(1.2, 0.2), Point2::new(0.0, 3.0));
        scene.upsert_ball(ObjectId(1), ahead(0.5, 0.0), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();
        assert_eq!(snapshot.goals.len(), 1);
        let goal = snapshot.goal(Side::Yellow).unwrap();
        assert_abs_diff_eq!(goal.distance, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(goal.azimuth, 0.2, epsilon = 1e-12);
        assert!(snapshot.goal(Side::Blue).is_none());
    }

    #[test]
    fn ball_on_the_apex_counts_as_dead_ahead() {
        let mut scene = scene();
        scene.upsert_ball(ObjectId(1), Point2::origin(), true);

        let snapshot = sensor().observe(&origin_pose(), &scene).unwrap();
        assert_eq!(snapshot.balls.len(), 1);
        assert_eq!(snapshot.balls[0].distance, 0.0);
        assert_eq!(snapshot.balls[0].bearing, 1.0);
    }

    #[test]
    fn ids_persist_while_continuously_visible() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(3), ahead(1.0, 0.1), true);
        rig.scene
            .write()
            .upsert_ball(ObjectId(8), ahead(1.2, -0.2), true);

        let first = rig.camera.tick(0.01).unwrap();
        let mut ids: Vec<_> = first.balls.iter().map(|b| (b.debug_object_id(), b.id)).collect();
        assert_eq!(ids, vec![(ObjectId(3), 0), (ObjectId(8), 1)]);

        for step in 1..20 {
            // Balls drift and the robot turns slightly, both stay in view.
            let drift = step as f64 * 0.01;
            rig.scene
                .write()
                .upsert_ball(ObjectId(3), ahead(1.0 + drift, 0.1), true);
            *rig.body.write() = Isometry2::rotation(drift * 0.1);

            let snapshot = rig.camera.tick(0.01).unwrap();
            ids = snapshot
                .balls
                .iter()
                .map(|b| (b.debug_object_id(), b.id))
                .collect();
            assert_eq!(ids, vec![(ObjectId(3), 0), (ObjectId(8), 1)]);
        }
    }

    #[test]
    fn ball_reentering_view_gets_new_id() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(7), ahead(1.0, 0.0), true);
        assert_eq!(rig.camera.tick(0.01).unwrap().balls[0].id, 0);

        rig.scene
            .write()
            .upsert_ball(ObjectId(7), ahead(1.0, FRAC_PI_2), true);
        assert!(rig.camera.tick(0.01).unwrap().balls.is_empty());

        rig.scene
            .write()
            .upsert_ball(ObjectId(7), ahead(1.0, 0.0), true);
        assert_eq!(rig.camera.tick(0.01).unwrap().balls[0].id, 1);
    }

    #[test]
    fn ids_within_a_tick_are_unique() {
        let mut rig = rig();
        for i in 0..6 {
            rig.scene
                .write()
                .upsert_ball(ObjectId(i), ahead(0.3 + i as f64 * 0.2, 0.0), true);
        }
        rig.camera.tick(0.01).unwrap();

        // Half of them leave, two new ones arrive.
        {
            let mut scene = rig.scene.write();
            for i in 0..3 {
                scene.remove_ball(ObjectId(i));
            }
            scene.upsert_ball(ObjectId(20), ahead(0.4, 0.3), true);
            scene.upsert_ball(ObjectId(21), ahead(0.6, -0.3), true);
        }
        let snapshot = rig.camera.tick(0.01).unwrap();
        let mut ids: Vec<_> = snapshot.balls.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn held_snapshot_survives_a_new_tick() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(1), ahead(1.0, 0.0), true);
        rig.camera.tick(0.01).unwrap();

        let held = rig.camera.visible_balls();
        rig.scene.write().clear_balls();
        rig.camera.tick(0.01).unwrap();

        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, 0);
        assert!(rig.camera.visible_balls().is_empty());
        assert_eq!(rig.camera.snapshot().tick, 2);
    }

    #[test]
    fn lost_goal_aborts_tick_and_keeps_previous_snapshot() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(1), ahead(1.0, 0.0), true);
        rig.camera.tick(0.01).unwrap();

        rig.scene.write().remove_goal(Side::Blue);
        assert_eq!(
            rig.camera.step(0.01),
            Err(VisionError::MissingCollaborator("blue goal"))
        );
        assert_eq!(rig.camera.snapshot().tick, 1);
        assert_eq!(rig.camera.visible_balls().len(), 1);
    }

    #[test]
    fn builder_requires_every_collaborator() {
        let body: Arc<dyn CarrierBody> = Arc::new(origin_pose());
        let full: Arc<dyn ObjectRegistry> = Arc::new(scene());

        let no_body = Camera::builder().registry(full.clone()).build();
        assert_eq!(
            no_body.unwrap_err(),
            VisionError::MissingCollaborator("carrying body")
        );

        let no_registry = Camera::builder().body(body.clone()).build();
        assert_eq!(
            no_registry.unwrap_err(),
            VisionError::MissingCollaborator("object registry")
        );

        let mut partial = scene();
        partial.remove_goal(Side::Yellow);
        let no_goal = Camera::builder()
            .body(body.clone())
            .registry(Arc::new(partial))
            .build();
        assert_eq!(
            no_goal.unwrap_err(),
            VisionError::MissingCollaborator("yellow goal")
        );

        let camera = Camera::builder().body(body).registry(full).build().unwrap();
        assert_eq!(camera.sensor().field_of_view(), &FieldOfView::default());
        assert!(camera.visible_balls().is_empty());
    }

    #[test]
    fn reconfigure_changes_what_is_visible() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(1), ahead(3.0, 0.0), true);
        assert!(rig.camera.tick(0.01).unwrap().balls.is_empty());

        assert!(rig.camera.configure(0.0, 90.0, -1.0).is_err());
        assert!(rig.camera.tick(0.01).unwrap().balls.is_empty());

        rig.camera.configure(0.0, 60.0, 4.0).unwrap();
        assert_eq!(rig.camera.tick(0.01).unwrap().balls.len(), 1);
    }

    #[test]
    fn painting_labels_sightings_in_body_frame() {
        let mut rig = rig();
        rig.scene
            .write()
            .upsert_ball(ObjectId(1), ahead(1.0, 0.0), true);
        rig.camera.tick(0.01).unwrap();

        let mut canvas = TextCanvas::new();
        rig.camera.paint(&mut canvas);
        let lines = canvas.into_lines();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("polygon (0.00, 0.00)"));
        assert!(lines[1].ends_with("#0 - 100cm / 0°"));
        assert!(lines[1].contains("-1.00)"));
    }
    #[test]
    fn feed_readers_on_other_threads_see_whole_ticks() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::thread;

        const TICKS: u64 = 40;
        let angles = [-0.2, 0.0, 0.2];
        // Every ball sits at the same distance, which changes each tick.
        let distance_at = |tick: u64| 0.5 + 0.02 * tick as f64;

        let mut rig = rig();
        let place_balls = |scene: &RwLock<SceneRegistry>, tick: u64| {
            let mut scene = scene.write();
            for (i, angle) in angles.iter().enumerate() {
                scene.upsert_ball(ObjectId(i as u64), ahead(distance_at(tick), *angle), true);
            }
        };
        place_balls(&*rig.scene, 1);
        let held = rig.camera.tick(0.01).unwrap();

        let feed = rig.camera.feed();
        let done = Arc::new(AtomicBool::new(false));
        let reader = {
            let done = done.clone();
            thread::spawn(move || {
                let mut reads = 0u64;
                let mut last_tick = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let snapshot = feed.snapshot();
                    assert!(snapshot.tick >= last_tick);
                    last_tick = snapshot.tick;
                    assert_eq!(snapshot.balls.len(), 3);
                    for (ball, expected_id) in snapshot.balls.iter().zip(0..) {
                        assert_eq!(ball.id, expected_id);
                        assert_abs_diff_eq!(
                            ball.distance,
                            distance_at(snapshot.tick),
                            epsilon = 1e-9
                        );
                    }
                    reads += 1;
                    if finished {
                        break;
                    }
                }
                (held, reads)
            })
        };

        for tick in 2..=TICKS {
            place_balls(&*rig.scene, tick);
            rig.camera.tick(0.01).unwrap();
        }
        done.store(true, Ordering::Release);

        let (held, reads) = reader.join().unwrap();
        assert!(reads > 0);
        assert_eq!(held.tick, 1);
        for ball in held.balls.iter() {
            assert_abs_diff_eq!(ball.distance, distance_at(1), epsilon = 1e-9);
        }
        assert_eq!(rig.camera.snapshot().tick, TICKS);
    }
}
