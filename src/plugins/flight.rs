use bevy::prelude::*;

use crate::components::{Aircraft, AircraftConfig};
use crate::resources::{EnvironmentConfig, PhysicsConfig};
use crate::systems::{
    aircraft_step_system, environment_sync_system, telemetry_log_system, TelemetryEvent,
};
use crate::utils::{ConfigError, MAX_TIMESTEP};

/// Flight model stages within `FixedUpdate`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Environment,
    Step,
    Telemetry,
}

/// Steps every [`Aircraft`] entity at a fixed rate and logs their telemetry.
#[derive(Default)]
pub struct FlightModelPlugin {
    pub environment: EnvironmentConfig,
    pub physics: PhysicsConfig,
}

impl FlightModelPlugin {
    pub fn new(environment: EnvironmentConfig, physics: PhysicsConfig) -> Self {
        Self {
            environment,
            physics,
        }
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        if self.physics.timestep > MAX_TIMESTEP {
            warn!(
                "Fixed timestep {:.4} s exceeds {:.4} s; the explicit integrator may diverge",
                self.physics.timestep, MAX_TIMESTEP
            );
        }

        app.insert_resource(self.environment)
            .insert_resource(self.physics)
            .insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep))
            .add_event::<TelemetryEvent>();

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Environment, FlightSet::Step, FlightSet::Telemetry).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                environment_sync_system.in_set(FlightSet::Environment),
                aircraft_step_system.in_set(FlightSet::Step),
                telemetry_log_system.in_set(FlightSet::Telemetry),
            ),
        );
    }
}

/// Builds an aircraft from `config` and spawns it with a [`Name`].
///
/// The aircraft picks up the current [`EnvironmentConfig`] and [`PhysicsConfig`] when
/// those resources exist.
pub fn spawn_aircraft(world: &mut World, config: &AircraftConfig) -> Result<Entity, ConfigError> {
    let environment = world
        .get_resource::<EnvironmentConfig>()
        .copied()
        .unwrap_or_default();
    let physics = world
        .get_resource::<PhysicsConfig>()
        .copied()
        .unwrap_or_default();

    let aircraft = config
        .build()?
        .with_environment(environment)
        .with_telemetry_interval(physics.telemetry_interval);

    info!(
        "Spawning {} ({} surfaces, {:.0} kg)",
        config.name,
        aircraft.surfaces().len(),
        aircraft.rigid_body.mass()
    );

    Ok(spawn_built_aircraft(world, aircraft, &config.name))
}

/// Spawns an already-built aircraft.
pub fn spawn_built_aircraft(world: &mut World, aircraft: Aircraft, name: &str) -> Entity {
    world.spawn((aircraft, Name::new(name.to_string()))).id()
}
