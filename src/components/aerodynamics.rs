use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::components::airfoil::{AirfoilTable, PolarLookup};
use crate::components::physics::RigidBody;
use crate::resources::EnvironmentConfig;
use crate::utils::{
    deg_to_rad, forward, is_finite_vector, rad_to_deg, up, FlightModelError, DEFLECTION_EPSILON,
};

/// What a surface is for. Control roles are resolved to collection indices once,
/// when the aircraft is built.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceRole {
    #[default]
    Wing,
    LeftAileron,
    RightAileron,
    Elevator,
    Rudder,
    Other,
}

/// Lift and drag produced by one surface during a step, body frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SurfaceForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    /// Angle of attack seen by the surface [deg]
    pub angle_of_attack: f64,
}

impl SurfaceForces {
    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }
}

/// A lifting surface attached to the body at a fixed point.
#[derive(Debug, Clone)]
pub struct AerodynamicSurface {
    /// Reference area [m²]
    area: f64,
    /// Attachment point in body coordinates [m]
    position: Vector3<f64>,
    /// Neutral surface normal, body frame
    normal: Vector3<f64>,
    airfoil: Arc<AirfoilTable>,
    role: SurfaceRole,

    pub lift_multiplier: f64,
    pub drag_multiplier: f64,
    pub lookup: PolarLookup,
    /// Current deflection [deg]
    pub deflection: f64,
}

impl AerodynamicSurface {
    /// Build a surface from its reference area. `normal` is normalized here.
    pub fn new(
        position: Vector3<f64>,
        area: f64,
        airfoil: Arc<AirfoilTable>,
        normal: Vector3<f64>,
    ) -> Result<Self, FlightModelError> {
        if !area.is_finite() || area < 0.0 {
            return Err(FlightModelError::InvalidSurface(format!(
                "area must be finite and non-negative, got {area}"
            )));
        }
        if !is_finite_vector(&position) {
            return Err(FlightModelError::InvalidSurface(
                "position must be finite".into(),
            ));
        }
        let normal = normal
            .try_normalize(f64::EPSILON)
            .ok_or_else(|| FlightModelError::InvalidSurface("normal must be non-zero".into()))?;

        Ok(Self {
            area,
            position,
            normal,
            airfoil,
            role: SurfaceRole::default(),
            lift_multiplier: 1.0,
            drag_multiplier: 1.0,
            lookup: PolarLookup::default(),
            deflection: 0.0,
        })
    }

    /// Build a surface from span and chord, `area = wingspan * chord`, facing body up.
    pub fn from_span_chord(
        position: Vector3<f64>,
        wingspan: f64,
        chord: f64,
        airfoil: Arc<AirfoilTable>,
    ) -> Result<Self, FlightModelError> {
        Self::new(position, wingspan * chord, airfoil, up())
    }

    pub fn with_role(mut self, role: SurfaceRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_normal(mut self, normal: Vector3<f64>) -> Result<Self, FlightModelError> {
        let rebuilt = Self::new(self.position, self.area, self.airfoil.clone(), normal)?;
        self.normal = rebuilt.normal;
        Ok(self)
    }

    pub fn with_multipliers(mut self, lift: f64, drag: f64) -> Self {
        self.lift_multiplier = lift;
        self.drag_multiplier = drag;
        self
    }

    pub fn with_lookup(mut self, lookup: PolarLookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn airfoil(&self) -> &Arc<AirfoilTable> {
        &self.airfoil
    }

    pub(crate) fn set_role(&mut self, role: SurfaceRole) {
        self.role = role;
    }

    /// Neutral normal rotated by the current deflection about `forward × normal`.
    /// Deflections within [`DEFLECTION_EPSILON`] return the neutral normal exactly, as does
    /// a normal along the forward axis, which has no hinge axis to rotate about.
    pub fn effective_normal(&self) -> Vector3<f64> {
        if self.deflection.abs() <= DEFLECTION_EPSILON {
            return self.normal;
        }
        match Unit::try_new(forward().cross(&self.normal), f64::EPSILON) {
            Some(axis) => {
                UnitQuaternion::from_axis_angle(&axis, deg_to_rad(self.deflection)) * self.normal
            }
            None => self.normal,
        }
    }

    /// Lift and drag for the current airflow, without touching the body.
    ///
    /// Zero airspeed or non-positive area yields zero force. Flow parallel to the
    /// normal leaves the lift direction undefined; that case is not trapped.
    pub fn compute_forces(&self, rigid_body: &RigidBody, air_density: f64) -> SurfaceForces {
        let local_velocity = rigid_body.get_point_velocity(self.position);
        let speed = local_velocity.norm();

        if speed <= 0.0 || self.area <= 0.0 {
            return SurfaceForces::default();
        }

        let normal = self.effective_normal();
        let drag_direction = -local_velocity / speed;
        let lift_direction = drag_direction
            .cross(&normal)
            .cross(&drag_direction)
            .normalize();

        let angle_of_attack = rad_to_deg(drag_direction.dot(&normal).clamp(-1.0, 1.0).asin());
        let (lift_coefficient, drag_coefficient) =
            self.airfoil.lookup(angle_of_attack, self.lookup);

        let dynamic_pressure = 0.5 * air_density * self.area * speed * speed;

        SurfaceForces {
            lift: lift_direction * lift_coefficient * self.lift_multiplier * dynamic_pressure,
            drag: drag_direction * drag_coefficient * self.drag_multiplier * dynamic_pressure,
            angle_of_attack,
        }
    }

    /// Accumulate this surface's lift and drag on `rigid_body` at the attachment point.
    pub fn apply_forces(&self, rigid_body: &mut RigidBody, environment: &EnvironmentConfig) {
        let forces = self.compute_forces(rigid_body, environment.air_density);
        rigid_body.add_force_at_point(forces.total(), self.position);
    }
}
