use serde::{Deserialize, Serialize};

use crate::components::propulsion::PowerPlant;

/// Configuration for the aircraft engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerplantConfig {
    /// Thrust at full throttle (N)
    pub thrust: f64,
    /// Initial throttle setting [0-1]
    pub throttle: f64,
    pub horsepower: f64,
    pub rpm: f64,
}

impl Default for PowerplantConfig {
    fn default() -> Self {
        Self {
            thrust: 50000.0,
            throttle: 0.5,
            horsepower: 1000.0,
            rpm: 2400.0,
        }
    }
}

impl From<&PowerplantConfig> for PowerPlant {
    fn from(config: &PowerplantConfig) -> Self {
        Self {
            throttle: config.throttle.clamp(0.0, 1.0),
            thrust: config.thrust,
            horsepower: config.horsepower,
            rpm: config.rpm,
        }
    }
}
