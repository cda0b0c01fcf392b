use bevy::prelude::*;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::FlightModelError;

/// Six degree of freedom rigid body.
///
/// Frames: `position` and `velocity` are world-frame, `angular_velocity` is body-frame,
/// `orientation` rotates body into world. The force accumulator is world-frame and the
/// torque accumulator is body-frame; both are drained by [`RigidBody::update`].
///
/// Serializes as a [`RigidBodyState`] snapshot; deserializing re-runs the mass and
/// inertia checks of [`RigidBody::new`].
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RigidBodyState", into = "RigidBodyState")]
pub struct RigidBody {
    mass: f64,
    inertia: Matrix3<f64>,
    inertia_inv: Matrix3<f64>,
    /// Center of mass offset in body coordinates [m]
    center_of_mass: Vector3<f64>,
    /// Constant world-frame acceleration applied on top of the accumulated force [m/s²]
    gravity: Vector3<f64>,

    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Rotation from body to world frame
    pub orientation: UnitQuaternion<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,

    force: Vector3<f64>,
    torque: Vector3<f64>,
}

impl RigidBody {
    /// Create a body at rest at the origin.
    ///
    /// Mass must be positive and finite; inertia must be symmetric and positive definite.
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Result<Self, FlightModelError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(FlightModelError::InvalidMass(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }

        if !is_inertia_valid(&inertia) {
            return Err(FlightModelError::InvalidInertia(
                "inertia tensor must be symmetric and positive definite".into(),
            ));
        }

        let inertia_inv = inertia.try_inverse().ok_or_else(|| {
            FlightModelError::InvalidInertia("failed to invert inertia tensor".into())
        })?;

        Ok(Self {
            mass,
            inertia,
            inertia_inv,
            center_of_mass: Vector3::zeros(),
            gravity: Vector3::zeros(),
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        })
    }

    pub fn with_gravity(mut self, gravity: Vector3<f64>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn set_gravity(&mut self, gravity: Vector3<f64>) {
        self.gravity = gravity;
    }

    pub fn with_center_of_mass(mut self, center_of_mass: Vector3<f64>) -> Self {
        self.center_of_mass = center_of_mass;
        self
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia(&self) -> &Matrix3<f64> {
        &self.inertia
    }

    pub fn inertia_inv(&self) -> &Matrix3<f64> {
        &self.inertia_inv
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.center_of_mass
    }

    pub fn gravity(&self) -> Vector3<f64> {
        self.gravity
    }

    /// Accumulated world-frame force for the current step [N]
    pub fn net_force(&self) -> Vector3<f64> {
        self.force
    }

    /// Accumulated body-frame torque for the current step [N⋅m]
    pub fn net_torque(&self) -> Vector3<f64> {
        self.torque
    }

    /// Body to world
    pub fn transform_direction(&self, direction: Vector3<f64>) -> Vector3<f64> {
        self.orientation * direction
    }

    /// World to body
    pub fn inverse_transform_direction(&self, direction: Vector3<f64>) -> Vector3<f64> {
        self.orientation.inverse() * direction
    }

    /// Linear velocity expressed in the body frame [m/s]
    pub fn body_velocity(&self) -> Vector3<f64> {
        self.inverse_transform_direction(self.velocity)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Velocity of a body-fixed point, expressed in the body frame [m/s].
    pub fn get_point_velocity(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.body_velocity() + self.angular_velocity.cross(&point)
    }

    /// Add a world-frame force through the center of mass.
    pub fn add_force(&mut self, force: Vector3<f64>) {
        self.force += force;
    }

    /// Add a body-frame force through the center of mass.
    pub fn add_relative_force(&mut self, force: Vector3<f64>) {
        self.force += self.transform_direction(force);
    }

    /// Add a body-frame torque.
    pub fn add_relative_torque(&mut self, torque: Vector3<f64>) {
        self.torque += torque;
    }

    /// Add a body-frame force acting at a body-fixed point. The offset from the center
    /// of mass produces torque `(point - com) × force`.
    pub fn add_force_at_point(&mut self, force: Vector3<f64>, point: Vector3<f64>) {
        self.add_relative_force(force);
        self.add_relative_torque((point - self.center_of_mass).cross(&force));
    }

    /// Advance the state by `dt` seconds and drain both accumulators.
    ///
    /// Semi-implicit Euler: velocities are updated from the accumulated force and torque
    /// first, then position and orientation are advanced with the new velocities. This
    /// is stable for the small fixed timesteps the simulation uses (`dt` up to 1/30 s);
    /// larger steps are not guarded against. A zero `dt` leaves the state untouched.
    pub fn update(&mut self, dt: f64) {
        let acceleration = self.force / self.mass + self.gravity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        let angular_acceleration = self.inertia_inv * self.torque;
        self.angular_velocity += angular_acceleration * dt;

        let rotation_vector = self.angular_velocity * dt;
        if rotation_vector.norm_squared() > 0.0 {
            // Body-frame rate, so the increment composes on the right.
            let rotation = UnitQuaternion::from_scaled_axis(rotation_vector);
            self.orientation =
                UnitQuaternion::new_normalize((self.orientation * rotation).into_inner());
        }

        self.clear_accumulators();
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vector3::zeros();
        self.torque = Vector3::zeros();
    }

    /// Translational plus rotational kinetic energy [J]
    pub fn kinetic_energy(&self) -> f64 {
        let translational = 0.5 * self.mass * self.velocity.norm_squared();
        let rotational = 0.5 * self.angular_velocity.dot(&(self.inertia * self.angular_velocity));
        translational + rotational
    }
}

/// Serialized form of a [`RigidBody`]. The inverse inertia is derived and the
/// accumulators are per-step, so neither is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    #[serde(default)]
    pub center_of_mass: Vector3<f64>,
    #[serde(default)]
    pub gravity: Vector3<f64>,
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
}

impl TryFrom<RigidBodyState> for RigidBody {
    type Error = FlightModelError;

    fn try_from(state: RigidBodyState) -> Result<Self, Self::Error> {
        let mut body = RigidBody::new(state.mass, state.inertia)?
            .with_center_of_mass(state.center_of_mass)
            .with_gravity(state.gravity)
            .with_position(state.position)
            .with_velocity(state.velocity)
            .with_orientation(state.orientation);
        body.angular_velocity = state.angular_velocity;
        Ok(body)
    }
}

impl From<RigidBody> for RigidBodyState {
    fn from(body: RigidBody) -> Self {
        Self {
            mass: body.mass,
            inertia: body.inertia,
            center_of_mass: body.center_of_mass,
            gravity: body.gravity,
            position: body.position,
            orientation: body.orientation,
            velocity: body.velocity,
            angular_velocity: body.angular_velocity,
        }
    }
}

/// Check if inertia tensor is valid (symmetric and positive definite)
fn is_inertia_valid(inertia: &Matrix3<f64>) -> bool {
    if inertia.iter().any(|v| !v.is_finite()) {
        return false;
    }

    if !is_matrix_symmetric(inertia) {
        return false;
    }

    inertia.symmetric_eigen().eigenvalues.iter().all(|&v| v > 0.0)
}

fn is_matrix_symmetric(mat: &Matrix3<f64>) -> bool {
    const EPSILON: f64 = 1e-10;
    for i in 0..3 {
        for j in 0..3 {
            if (mat[(i, j)] - mat[(j, i)]).abs() > EPSILON {
                return false;
            }
        }
    }
    true
}
