use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{
    trainer_surfaces, MassModel, PowerplantConfig, SurfaceConfig,
};
use crate::components::aircraft::controls::{ControlScheme, ControlSurfaceMap, DeflectionLimits};
use crate::components::aircraft::model::Aircraft;
use crate::components::aerodynamics::AerodynamicSurface;
use crate::components::propulsion::PowerPlant;
use crate::utils::ConfigError;

/// Everything needed to build an [`Aircraft`]: mass properties, engine and surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, used in logs.
    pub name: String,
    pub mass: MassModel,
    #[serde(default)]
    pub engine: PowerplantConfig,
    /// Surfaces in collection order.
    pub surfaces: Vec<SurfaceConfig>,
    #[serde(default)]
    pub limits: DeflectionLimits,
    #[serde(default)]
    pub control_scheme: ControlScheme,
    /// Ignore surface roles and address control surfaces by index (1, 2, 4, 5).
    #[serde(default)]
    pub indexed_surfaces: bool,
}

impl Default for AircraftConfig {
    /// The single-engine trainer.
    fn default() -> Self {
        Self {
            name: "Trainer".to_string(),
            mass: MassModel::trainer(),
            engine: PowerplantConfig::default(),
            surfaces: trainer_surfaces(),
            limits: DeflectionLimits::default(),
            control_scheme: ControlScheme::default(),
            indexed_surfaces: false,
        }
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Trainer => Ok(Self::default()),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Reads and validates a YAML aircraft file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks the values the model itself cannot reject on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surfaces.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{}: at least one surface is required",
                self.name
            )));
        }
        if !(self.engine.thrust.is_finite() && self.engine.thrust >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{}: engine thrust must be finite and non-negative, got {}",
                self.name, self.engine.thrust
            )));
        }
        if !(0.0..=1.0).contains(&self.engine.throttle) {
            return Err(ConfigError::ValidationError(format!(
                "{}: throttle must lie in [0, 1], got {}",
                self.name, self.engine.throttle
            )));
        }
        let limits = [self.limits.aileron, self.limits.elevator, self.limits.rudder];
        if limits.iter().any(|l| !(l.is_finite() && *l >= 0.0)) {
            return Err(ConfigError::ValidationError(format!(
                "{}: deflection limits must be finite and non-negative",
                self.name
            )));
        }
        Ok(())
    }

    /// Builds the aircraft at rest at the origin, with sea-level defaults for the
    /// atmosphere. Use [`Aircraft::with_environment`] to change them.
    pub fn build(&self) -> Result<Aircraft, ConfigError> {
        self.validate()?;

        let rigid_body = self.mass.rigid_body()?;
        let engine = PowerPlant::from(&self.engine);
        let mut surfaces = self
            .surfaces
            .iter()
            .map(SurfaceConfig::build)
            .collect::<Result<Vec<AerodynamicSurface>, _>>()?;

        if self.indexed_surfaces {
            ControlSurfaceMap::tag_legacy(&mut surfaces)?;
        }

        Ok(Aircraft::from_parts(rigid_body, engine, surfaces)?
            .with_limits(self.limits)
            .with_control_scheme(self.control_scheme))
    }
}

/// Source for aircraft configuration.
/// Either the built-in trainer or a YAML file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Trainer,
    File(PathBuf),
}

impl From<Option<PathBuf>> for AircraftSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(AircraftSource::Trainer, AircraftSource::File)
    }
}
