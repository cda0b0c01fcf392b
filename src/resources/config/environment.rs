use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{up, GRAVITY, SEA_LEVEL_AIR_DENSITY};

/// Atmospheric constants threaded through every force computation.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Air density [kg/m³]
    pub air_density: f64,
    /// Gravitational acceleration magnitude [m/s²]; zero disables gravity.
    pub gravity: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            air_density: SEA_LEVEL_AIR_DENSITY,
            gravity: GRAVITY,
        }
    }
}

impl EnvironmentConfig {
    /// No gravity, sea-level air. Useful for isolating aerodynamic effects.
    pub fn weightless() -> Self {
        Self {
            gravity: 0.0,
            ..Default::default()
        }
    }

    /// World-frame gravitational acceleration vector.
    pub fn gravity_vector(&self) -> Vector3<f64> {
        -up() * self.gravity
    }
}
