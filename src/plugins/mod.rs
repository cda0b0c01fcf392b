mod flight;

pub use flight::{spawn_aircraft, spawn_built_aircraft, FlightModelPlugin, FlightSet};
