use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::physics::RigidBody;
use crate::utils::{kilometer_per_hour, up};

/// World-space pose handed to external consumers (cameras, renderers). Read-only copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftPose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
}

impl From<&RigidBody> for AircraftPose {
    fn from(body: &RigidBody) -> Self {
        Self {
            position: body.position,
            orientation: body.orientation,
            velocity: body.velocity,
        }
    }
}

/// Periodic state sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Simulated time since the aircraft was created [s]
    pub time: f64,
    /// Airspeed [km/h]
    pub speed_kmh: f64,
    pub throttle: f64,
    /// Height along the world up axis [m]
    pub altitude: f64,
    pub pose: AircraftPose,
}

impl Telemetry {
    pub fn sample(time: f64, body: &RigidBody, throttle: f64) -> Self {
        Self {
            time,
            speed_kmh: kilometer_per_hour(body.speed()),
            throttle,
            altitude: body.position.dot(&up()),
            pose: AircraftPose::from(body),
        }
    }
}

impl std::fmt::Display for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} km/h, thr: {:.2}, alt: {:.2} m",
            self.speed_kmh, self.throttle, self.altitude
        )
    }
}
