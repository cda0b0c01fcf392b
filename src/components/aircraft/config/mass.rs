use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::components::physics::RigidBody;
use crate::utils::FlightModelError;

/// Mass properties of the aircraft, body axes (x forward, y up, z right).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Moment of inertia about the roll (x) axis (kg·m²).
    pub ixx: f64,
    /// Moment of inertia about the yaw (y) axis (kg·m²).
    pub iyy: f64,
    /// Moment of inertia about the pitch (z) axis (kg·m²).
    pub izz: f64,
    /// Off-diagonal xy entry of the inertia matrix (kg·m²).
    #[serde(default)]
    pub ixy: f64,
}

impl Default for MassModel {
    fn default() -> Self {
        Self::trainer()
    }
}

impl MassModel {
    /// # Arguments
    /// * `mass` - Total mass of the aircraft (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixy` - Entry shared by the (0, 1) and (1, 0) cells of the inertia matrix (kg·m²).
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixy: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            ixy,
        }
    }

    /// Single-engine trainer used as the default aircraft.
    pub fn trainer() -> Self {
        Self::new(10000.0, 48531.0, 256608.0, 211333.0, -1320.0)
    }

    pub fn inertia(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.ixx, self.ixy, 0.0, //
            self.ixy, self.iyy, 0.0, //
            0.0, 0.0, self.izz,
        )
    }

    /// A rigid body at rest at the origin carrying these mass properties.
    pub fn rigid_body(&self) -> Result<RigidBody, FlightModelError> {
        RigidBody::new(self.mass, self.inertia())
    }
}
