use flightmodel::{
    components::{Aircraft, AircraftConfig},
    resources::EnvironmentConfig,
};
use nalgebra::Vector3;

/// Cruise speed used for in-flight fixtures [m/s]
pub const CRUISE_SPEED: f64 = 100.0;

/// Altitude used for in-flight fixtures [m]
pub const CRUISE_ALTITUDE: f64 = 1000.0;

pub fn trainer_config() -> AircraftConfig {
    AircraftConfig::default()
}

/// The trainer at rest at the origin, sea-level air and gravity.
pub fn trainer_at_rest() -> Aircraft {
    trainer_config().build().expect("trainer config is valid")
}

/// The trainer flying level along the world forward axis.
pub fn trainer_in_flight() -> Aircraft {
    let mut aircraft = trainer_at_rest();
    aircraft.rigid_body.position = Vector3::new(0.0, CRUISE_ALTITUDE, 0.0);
    aircraft.rigid_body.velocity = Vector3::new(CRUISE_SPEED, 0.0, 0.0);
    aircraft
}

/// Same as [`trainer_in_flight`] without gravity.
pub fn weightless_trainer_in_flight() -> Aircraft {
    trainer_in_flight().with_environment(EnvironmentConfig::weightless())
}

pub const TRAINER_YAML: &str = r#"
name: YamlTrainer
mass: { mass: 10000.0, ixx: 48531.0, iyy: 256608.0, izz: 211333.0, ixy: -1320.0 }
engine: { thrust: 50000.0, throttle: 0.25 }
limits: { aileron: 20.0 }
surfaces:
  - { role: Wing, position: [-1.0, 0.0, -2.7], span: 6.96, chord: 2.5, airfoil: Naca2412 }
  - { role: LeftAileron, position: [-2.5, 0.0, -2.0], span: 3.8, chord: 1.26, airfoil: Naca0012 }
  - { role: RightAileron, position: [-2.5, 0.0, 2.0], span: 3.8, chord: 1.26, airfoil: Naca0012 }
  - { role: Wing, position: [-1.0, 0.0, 2.7], span: 6.96, chord: 2.5, airfoil: Naca2412 }
  - { role: Elevator, position: [-6.6, -0.1, 0.0], span: 6.54, chord: 2.7, airfoil: Naca0012 }
  - role: Rudder
    position: [-6.6, 0.0, 0.0]
    span: 5.31
    chord: 3.1
    airfoil: Naca0012
    normal: [0.0, 0.0, 1.0]
    lookup: Linear
"#;
