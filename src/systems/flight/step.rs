use bevy::prelude::*;
use std::sync::Mutex;

use crate::components::Aircraft;
use crate::resources::EnvironmentConfig;
use crate::systems::flight::TelemetryEvent;

/// Advances every aircraft by one fixed step.
///
/// Aircraft are independent, so entities are stepped in parallel. Telemetry samples are
/// gathered and sent once the parallel pass is done.
pub fn aircraft_step_system(
    mut query: Query<(Entity, &mut Aircraft)>,
    time: Res<Time<Fixed>>,
    mut telemetry_events: EventWriter<TelemetryEvent>,
) {
    let dt = time.delta_secs_f64();
    let samples = Mutex::new(Vec::new());

    query.par_iter_mut().for_each(|(entity, mut aircraft)| {
        if let Some(telemetry) = aircraft.update(dt) {
            if let Ok(mut samples) = samples.lock() {
                samples.push(TelemetryEvent { entity, telemetry });
            }
        }
    });

    let samples = samples
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if !samples.is_empty() {
        telemetry_events.send_batch(samples);
    }
}

/// Pushes a changed [`EnvironmentConfig`] onto every aircraft.
pub fn environment_sync_system(
    environment: Res<EnvironmentConfig>,
    mut query: Query<&mut Aircraft>,
) {
    if !environment.is_changed() {
        return;
    }

    for mut aircraft in query.iter_mut() {
        aircraft.set_environment(*environment);
    }
}
