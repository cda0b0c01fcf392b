mod step;
mod telemetry;

pub use step::{aircraft_step_system, environment_sync_system};
pub use telemetry::{telemetry_log_system, TelemetryEvent};
