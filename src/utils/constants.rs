use nalgebra::Vector3;

pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Fixed physics timestep
pub const MAX_TIMESTEP: f64 = 1.0 / 30.0; // Largest step the explicit integrator is trusted with

/// Deflections at or below this magnitude [deg] leave the surface normal untouched.
pub const DEFLECTION_EPSILON: f64 = 1e-6;

// Control surface travel at full stick [deg]
pub const MAX_AILERON_DEFLECTION: f64 = 15.0;
pub const MAX_ELEVATOR_DEFLECTION: f64 = 5.0;
pub const MAX_RUDDER_DEFLECTION: f64 = 5.0;

/// Seconds of simulated time between telemetry samples.
pub const TELEMETRY_INTERVAL: f64 = 0.5;

/// Body-frame forward axis (roll axis, thrust line).
pub fn forward() -> Vector3<f64> {
    Vector3::x()
}

/// Body-frame up axis (yaw axis, default surface normal).
pub fn up() -> Vector3<f64> {
    Vector3::y()
}

/// Body-frame right axis (pitch axis).
pub fn right() -> Vector3<f64> {
    Vector3::z()
}
