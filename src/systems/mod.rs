pub mod flight;

pub use flight::{
    aircraft_step_system, environment_sync_system, telemetry_log_system, TelemetryEvent,
};
