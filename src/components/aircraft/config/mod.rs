mod aircraft;
mod geometry;
mod mass;
mod propulsion;

pub use aircraft::{AircraftConfig, AircraftSource};
pub use geometry::{trainer_surfaces, SurfaceConfig};
pub use mass::MassModel;
pub use propulsion::PowerplantConfig;
