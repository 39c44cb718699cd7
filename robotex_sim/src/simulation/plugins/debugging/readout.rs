// robotex_sim/src/simulation/plugins/debugging/readout.rs

//! The consumer side of the camera: periodically reads the published
//! perception and logs it, the way a strategy layer or an operator display
//! would see it.

use crate::prelude::*;

pub struct PerceptionReadoutPlugin;

impl Plugin for PerceptionReadoutPlugin {
    fn build(&self, app: &mut App) {
        let period = app
            .world()
            .get_resource::<ScenarioConfig>()
            .expect("ScenarioConfig not found!")
            .simulation
            .readout_period_seconds;

        app.insert_resource(ReadoutTimer(Timer::from_seconds(
            period as f32,
            TimerMode::Repeating,
        )))
        .add_systems(
            FixedUpdate,
            perception_readout_system.in_set(SimulationSet::Readout),
        );
    }
}

#[derive(Resource)]
pub struct ReadoutTimer(pub Timer);

/// Formats one snapshot as log lines: a header, then `#id - Ncm / D°` per
/// ball and `<goal> - Ncm / D°` per goal.
pub fn readout_lines(owner: &str, snapshot: &PerceptionSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + snapshot.balls.len() + snapshot.goals.len());
    lines.push(format!(
        "[{}] tick {}: {} ball(s), {} goal(s) in view",
        owner,
        snapshot.tick,
        snapshot.balls.len(),
        snapshot.goals.len()
    ));
    lines.extend(snapshot.balls.iter().map(|ball| format!("  {}", ball)));
    lines.extend(snapshot.goals.iter().map(|goal| format!("  {}", goal)));
    lines
}

fn perception_readout_system(
    time: Res<Time>,
    mut timer: ResMut<ReadoutTimer>,
    cameras: Query<(&Name, &CameraRig)>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    for (name, rig) in &cameras {
        // One reference for the whole readout: it stays consistent even if
        // the camera publishes again meanwhile.
        let snapshot = rig.sensor.snapshot();
        for line in readout_lines(name.as_str(), &snapshot) {
            info!("{}", line);
        }

        let mut canvas = TextCanvas::new();
        rig.sensor.paint(&mut canvas);
        for line in canvas.lines() {
            debug!("[{}] paint {}", name.as_str(), line);
        }
    }
}
