use bevy::{prelude::*, time::TimeUpdateStrategy};
use flightmodel::{
    components::{Aircraft, AircraftConfig, Telemetry},
    plugins::{spawn_aircraft, FlightModelPlugin, FlightSet},
    resources::{EnvironmentConfig, PhysicsConfig},
    systems::TelemetryEvent,
};
use std::time::Duration;

/// Telemetry collected from every aircraft since the app was built.
#[derive(Resource, Default, Debug)]
pub struct TelemetryLog(pub Vec<(Entity, Telemetry)>);

fn collect_telemetry(mut events: EventReader<TelemetryEvent>, mut log: ResMut<TelemetryLog>) {
    for event in events.read() {
        log.0.push((event.entity, event.telemetry));
    }
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft_configs: Vec<AircraftConfig>,
    physics_config: PhysicsConfig,
    environment_config: EnvironmentConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft_configs: Vec::new(),
            physics_config: PhysicsConfig::default(),
            environment_config: EnvironmentConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_configs.push(config);
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = config;
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightModelPlugin::new(
                self.environment_config,
                self.physics_config,
            ))
            // One fixed step per frame.
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.physics_config.timestep,
            )))
            .init_resource::<TelemetryLog>()
            .add_systems(FixedUpdate, collect_telemetry.after(FlightSet::Step));

        let entities = self
            .aircraft_configs
            .iter()
            .map(|config| spawn_aircraft(app.world_mut(), config).expect("valid aircraft config"))
            .collect();

        // Run an initial update to start the clock; no fixed step runs yet
        app.update();

        TestApp { app, entities }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub entities: Vec<Entity>,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn aircraft(&self, index: usize) -> &Aircraft {
        self.app
            .world()
            .get::<Aircraft>(self.entities[index])
            .expect("aircraft entity exists")
    }

    pub fn aircraft_mut(&mut self, index: usize) -> Mut<Aircraft> {
        self.app
            .world_mut()
            .get_mut::<Aircraft>(self.entities[index])
            .expect("aircraft entity exists")
    }

    pub fn telemetry(&self) -> &[(Entity, Telemetry)] {
        self.get_state::<TelemetryLog>()
            .map(|log| log.0.as_slice())
            .unwrap_or_default()
    }
}
