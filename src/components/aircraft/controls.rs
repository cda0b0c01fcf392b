use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aerodynamics::{AerodynamicSurface, SurfaceRole};
use crate::utils::{
    FlightModelError, MAX_AILERON_DEFLECTION, MAX_ELEVATOR_DEFLECTION, MAX_RUDDER_DEFLECTION,
};

/// Pilot stick and pedal input, each axis in [-1, 1].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub roll: f64,
    pub yaw: f64,
    pub pitch: f64,
}

impl ControlInput {
    pub fn new(roll: f64, yaw: f64, pitch: f64) -> Self {
        Self { roll, yaw, pitch }
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    /// Every axis clamped into [-1, 1]. NaN becomes neutral.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            roll: clamp(self.roll),
            yaw: clamp(self.yaw),
            pitch: clamp(self.pitch),
        }
    }

    /// `(roll, yaw, pitch)`, matching the body axes `(forward, up, right)`.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.roll, self.yaw, self.pitch)
    }
}

/// Surface travel at full control input [deg].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeflectionLimits {
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
}

impl Default for DeflectionLimits {
    fn default() -> Self {
        Self {
            aileron: MAX_AILERON_DEFLECTION,
            elevator: MAX_ELEVATOR_DEFLECTION,
            rudder: MAX_RUDDER_DEFLECTION,
        }
    }
}

/// How control input turns into rotation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlScheme {
    #[default]
    /// Deflect ailerons, elevator and rudder; rotation comes from their aerodynamics.
    Surfaces,
    /// Apply `input ⊙ torque` directly as body torque, faded in linearly with airspeed
    /// up to `full_authority_speed` [m/s].
    DirectTorque {
        torque: Vector3<f64>,
        full_authority_speed: f64,
    },
}

impl ControlScheme {
    pub fn direct_torque() -> Self {
        ControlScheme::DirectTorque {
            torque: Vector3::new(1_500_000.0, 1_000.0, 1_000_000.0),
            full_authority_speed: 150.0,
        }
    }

    /// Body torque for the direct scheme at `speed`; zero for [`ControlScheme::Surfaces`].
    pub fn control_torque(&self, input: &ControlInput, speed: f64) -> Vector3<f64> {
        match self {
            ControlScheme::Surfaces => Vector3::zeros(),
            ControlScheme::DirectTorque {
                torque,
                full_authority_speed,
            } => {
                let authority = if *full_authority_speed > 0.0 {
                    (speed / full_authority_speed).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                input.as_vector().component_mul(torque) * authority
            }
        }
    }
}

/// Positions of the four control surfaces inside an aircraft's surface collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSurfaceMap {
    left_aileron: usize,
    right_aileron: usize,
    elevator: usize,
    rudder: usize,
}

impl ControlSurfaceMap {
    /// Fixed layout used by untagged surface lists: 1, 2, 4 and 5.
    pub const LEGACY: Self = Self {
        left_aileron: 1,
        right_aileron: 2,
        elevator: 4,
        rudder: 5,
    };

    /// Smallest collection the legacy layout can address.
    pub const LEGACY_MIN_SURFACES: usize = 6;

    /// Find each control role in `surfaces`. Every role must appear exactly once.
    pub fn resolve(surfaces: &[AerodynamicSurface]) -> Result<Self, FlightModelError> {
        let find = |role: SurfaceRole| -> Result<usize, FlightModelError> {
            let mut matches = surfaces
                .iter()
                .enumerate()
                .filter(|(_, s)| s.role() == role)
                .map(|(i, _)| i);
            let index = matches
                .next()
                .ok_or_else(|| FlightModelError::MissingControlSurface(format!("{role:?}")))?;
            if matches.next().is_some() {
                return Err(FlightModelError::InvalidSurface(format!(
                    "{role:?} assigned to more than one surface"
                )));
            }
            Ok(index)
        };

        Ok(Self {
            left_aileron: find(SurfaceRole::LeftAileron)?,
            right_aileron: find(SurfaceRole::RightAileron)?,
            elevator: find(SurfaceRole::Elevator)?,
            rudder: find(SurfaceRole::Rudder)?,
        })
    }

    /// Tag `surfaces` with the legacy layout's roles.
    pub fn tag_legacy(surfaces: &mut [AerodynamicSurface]) -> Result<Self, FlightModelError> {
        if surfaces.len() < Self::LEGACY_MIN_SURFACES {
            return Err(FlightModelError::MissingControlSurface(format!(
                "legacy layout needs at least {} surfaces, got {}",
                Self::LEGACY_MIN_SURFACES,
                surfaces.len()
            )));
        }
        let map = Self::LEGACY;
        for (index, surface) in surfaces.iter_mut().enumerate() {
            let role = match index {
                i if i == map.left_aileron => SurfaceRole::LeftAileron,
                i if i == map.right_aileron => SurfaceRole::RightAileron,
                i if i == map.elevator => SurfaceRole::Elevator,
                i if i == map.rudder => SurfaceRole::Rudder,
                _ if is_control_role(surface.role()) => SurfaceRole::Other,
                _ => surface.role(),
            };
            surface.set_role(role);
        }
        Ok(map)
    }

    pub fn left_aileron(&self) -> usize {
        self.left_aileron
    }

    pub fn right_aileron(&self) -> usize {
        self.right_aileron
    }

    pub fn elevator(&self) -> usize {
        self.elevator
    }

    pub fn rudder(&self) -> usize {
        self.rudder
    }

    /// Write deflections for `input` onto the mapped surfaces.
    ///
    /// Indices past the end of `surfaces` are skipped.
    pub fn apply(
        &self,
        surfaces: &mut [AerodynamicSurface],
        input: &ControlInput,
        limits: &DeflectionLimits,
    ) {
        let aileron = input.roll * limits.aileron;
        let deflections = [
            (self.left_aileron, aileron),
            (self.right_aileron, -aileron),
            (self.elevator, -(input.pitch * limits.elevator)),
            (self.rudder, input.yaw * limits.rudder),
        ];
        for (index, deflection) in deflections {
            if let Some(surface) = surfaces.get_mut(index) {
                surface.deflection = deflection;
            }
        }
    }
}

fn is_control_role(role: SurfaceRole) -> bool {
    matches!(
        role,
        SurfaceRole::LeftAileron
            | SurfaceRole::RightAileron
            | SurfaceRole::Elevator
            | SurfaceRole::Rudder
    )
}
