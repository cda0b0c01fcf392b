use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, TELEMETRY_INTERVAL};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step [s]
    pub timestep: f64,
    /// Simulated seconds between telemetry samples
    pub telemetry_interval: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            telemetry_interval: TELEMETRY_INTERVAL,
        }
    }
}
