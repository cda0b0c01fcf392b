use flightmodel::{
    components::{AircraftConfig, AircraftSource, ControlInput, PolarLookup, SurfaceRole},
    utils::ConfigError,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{trainer_config, TRAINER_YAML};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file.flush().expect("flush config");
    file
}

#[test]
fn test_load_aircraft_from_yaml_file() {
    let file = write_config(TRAINER_YAML);
    let config = AircraftConfig::new(AircraftSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(config.name, "YamlTrainer");
    assert_eq!(config.surfaces.len(), 6);
    assert_eq!(config.limits.aileron, 20.0);
    assert_eq!(config.limits.elevator, 5.0);
    assert_eq!(config.mass, trainer_config().mass);

    let mut aircraft = config.build().unwrap();
    assert_eq!(aircraft.throttle(), 0.25);
    assert_eq!(
        aircraft.surface(SurfaceRole::Rudder).unwrap().lookup,
        PolarLookup::Linear
    );

    aircraft.set_controls(ControlInput::new(1.0, 0.0, 0.0));
    aircraft.apply_controls();
    assert_eq!(
        aircraft.surface(SurfaceRole::LeftAileron).unwrap().deflection,
        20.0
    );
}

#[test]
fn test_yaml_trainer_matches_builtin_geometry() {
    let from_yaml = AircraftConfig::from_yaml_str(TRAINER_YAML).unwrap().build().unwrap();
    let builtin = trainer_config().build().unwrap();

    for (a, b) in from_yaml.surfaces().iter().zip(builtin.surfaces()) {
        assert_eq!(a.role(), b.role());
        assert_eq!(a.position(), b.position());
        approx::assert_relative_eq!(a.area(), b.area());
    }
}

#[test]
fn test_saved_config_loads_back() {
    let original = trainer_config();
    let file = write_config(&original.to_yaml_string().unwrap());
    let loaded = AircraftConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_malformed_yaml_is_a_yaml_error() {
    let file = write_config("name: Broken\nmass: [1, 2\n");
    let result = AircraftConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_unknown_airfoil_is_rejected() {
    let yaml = TRAINER_YAML.replace("Naca2412", "Naca9999");
    assert!(matches!(
        AircraftConfig::from_yaml_str(&yaml),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_duplicate_control_role_fails_to_build() {
    let yaml = TRAINER_YAML.replace("role: Elevator", "role: Rudder");
    let config = AircraftConfig::from_yaml_str(&yaml).unwrap();
    assert!(matches!(config.build(), Err(ConfigError::Model(_))));
}

#[test]
fn test_bundled_direct_torque_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join("trainer_direct_torque.yaml");
    let config = AircraftConfig::from_file(path).unwrap();
    assert_eq!(
        config.control_scheme,
        flightmodel::components::ControlScheme::direct_torque()
    );
    assert!(config.build().is_ok());
}
