pub mod config;
pub mod controls;
pub mod model;
pub mod state;

pub use config::{
    trainer_surfaces, AircraftConfig, AircraftSource, MassModel, PowerplantConfig, SurfaceConfig,
};
pub use controls::{ControlInput, ControlScheme, ControlSurfaceMap, DeflectionLimits};
pub use model::Aircraft;
pub use state::{AircraftPose, Telemetry};
