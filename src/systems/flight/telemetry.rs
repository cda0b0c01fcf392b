use bevy::prelude::*;

use crate::components::Telemetry;

/// A periodic state sample from one aircraft entity.
#[derive(Event, Debug, Clone)]
pub struct TelemetryEvent {
    pub entity: Entity,
    pub telemetry: Telemetry,
}

pub fn telemetry_log_system(
    mut telemetry_events: EventReader<TelemetryEvent>,
    names: Query<&Name>,
) {
    for event in telemetry_events.read() {
        match names.get(event.entity) {
            Ok(name) => info!("[{}] {}", name, event.telemetry),
            Err(_) => info!("[{}] {}", event.entity, event.telemetry),
        }
    }
}
