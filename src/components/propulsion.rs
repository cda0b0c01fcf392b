use serde::{Deserialize, Serialize};

use crate::components::physics::RigidBody;
use crate::utils::forward;

/// Fixed-axis engine producing thrust along the body forward axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Throttle setting [0-1]. Callers are expected to clamp; see `Aircraft::set_throttle`.
    pub throttle: f64,
    /// Thrust at full throttle [N]
    pub thrust: f64,

    // Carried for a future engine model, not used by the force output.
    pub horsepower: f64,
    pub rpm: f64,
}

impl Default for PowerPlant {
    fn default() -> Self {
        Self {
            throttle: 0.5,
            thrust: 10000.0,
            horsepower: 1000.0,
            rpm: 2400.0,
        }
    }
}

impl PowerPlant {
    pub fn new(thrust: f64) -> Self {
        Self {
            thrust,
            ..Default::default()
        }
    }

    /// Current thrust magnitude [N]
    pub fn current_thrust(&self) -> f64 {
        self.thrust * self.throttle
    }

    /// Thrust through the center of mass; propeller torque is not modelled.
    pub fn apply_forces(&self, rigid_body: &mut RigidBody) {
        rigid_body.add_relative_force(forward() * self.current_thrust());
    }
}
