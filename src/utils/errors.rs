use std::io;
use thiserror::Error;

/// Construction-time precondition violations. The simulation step itself never fails.
#[derive(Error, Debug)]
pub enum FlightModelError {
    #[error("Invalid mass: {0}")]
    InvalidMass(String),

    #[error("Invalid inertia tensor: {0}")]
    InvalidInertia(String),

    #[error("Invalid airfoil table: {0}")]
    InvalidAirfoil(String),

    #[error("Invalid surface geometry: {0}")]
    InvalidSurface(String),

    #[error("Missing control surface: {0}")]
    MissingControlSurface(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),

    #[error("Flight model error: {0}")]
    Model(#[from] FlightModelError),
}
