pub mod aerodynamics;
pub mod aircraft;
pub mod airfoil;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{AerodynamicSurface, SurfaceForces, SurfaceRole};
pub use aircraft::{
    trainer_surfaces, Aircraft, AircraftConfig, AircraftPose, AircraftSource, ControlInput,
    ControlScheme, ControlSurfaceMap, DeflectionLimits, MassModel, PowerplantConfig,
    SurfaceConfig, Telemetry,
};
pub use airfoil::{AirfoilKind, AirfoilSample, AirfoilTable, PolarLookup};
pub use physics::{RigidBody, RigidBodyState};
pub use propulsion::PowerPlant;
