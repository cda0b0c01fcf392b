#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_aircraft_valid, assert_rigid_body_valid, assert_vector_eq};
pub use fixtures::*;
pub use test_app::{TelemetryLog, TestApp, TestAppBuilder};
