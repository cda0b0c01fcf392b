use bevy::prelude::*;
use nalgebra::Matrix3;

use crate::components::aerodynamics::{AerodynamicSurface, SurfaceRole};
use crate::components::aircraft::controls::{
    ControlInput, ControlScheme, ControlSurfaceMap, DeflectionLimits,
};
use crate::components::aircraft::state::{AircraftPose, Telemetry};
use crate::components::physics::RigidBody;
use crate::components::propulsion::PowerPlant;
use crate::resources::EnvironmentConfig;
use crate::utils::{FlightModelError, TELEMETRY_INTERVAL};

/// A fixed-wing aircraft: one rigid body, one engine and an ordered set of surfaces.
///
/// Each step maps control input onto surface deflections, accumulates every surface's
/// lift and drag plus engine thrust on the rigid body, then integrates once.
#[derive(Component, Debug, Clone)]
pub struct Aircraft {
    pub rigid_body: RigidBody,
    pub engine: PowerPlant,
    surfaces: Vec<AerodynamicSurface>,
    control_map: ControlSurfaceMap,
    controls: ControlInput,
    limits: DeflectionLimits,
    scheme: ControlScheme,
    environment: EnvironmentConfig,
    telemetry_interval: f64,
    telemetry_timer: f64,
    elapsed: f64,
}

impl Aircraft {
    /// Build from role-tagged surfaces. Each of the four control roles must be present
    /// exactly once.
    pub fn new(
        mass: f64,
        thrust: f64,
        inertia: Matrix3<f64>,
        surfaces: Vec<AerodynamicSurface>,
    ) -> Result<Self, FlightModelError> {
        let rigid_body = RigidBody::new(mass, inertia)?;
        Self::from_parts(rigid_body, PowerPlant::new(thrust), surfaces)
    }

    /// Build from untagged surfaces laid out as left aileron = 1, right aileron = 2,
    /// elevator = 4, rudder = 5. Needs at least six surfaces.
    pub fn from_indexed_surfaces(
        mass: f64,
        thrust: f64,
        inertia: Matrix3<f64>,
        mut surfaces: Vec<AerodynamicSurface>,
    ) -> Result<Self, FlightModelError> {
        ControlSurfaceMap::tag_legacy(&mut surfaces)?;
        Self::new(mass, thrust, inertia, surfaces)
    }

    /// Assemble an aircraft from prebuilt parts.
    ///
    /// Gravity is owned by the aircraft's [`EnvironmentConfig`]: any gravity already set on
    /// `rigid_body` is replaced by the default environment's. Use
    /// [`Aircraft::with_environment`] to change it afterwards.
    pub fn from_parts(
        rigid_body: RigidBody,
        engine: PowerPlant,
        surfaces: Vec<AerodynamicSurface>,
    ) -> Result<Self, FlightModelError> {
        let control_map = ControlSurfaceMap::resolve(&surfaces)?;
        let environment = EnvironmentConfig::default();
        let rigid_body = rigid_body.with_gravity(environment.gravity_vector());

        Ok(Self {
            rigid_body,
            engine,
            surfaces,
            control_map,
            controls: ControlInput::neutral(),
            limits: DeflectionLimits::default(),
            scheme: ControlScheme::default(),
            environment,
            telemetry_interval: TELEMETRY_INTERVAL,
            // Primed so the first non-zero step emits a sample.
            telemetry_timer: TELEMETRY_INTERVAL,
            elapsed: 0.0,
        })
    }

    /// Replace the atmosphere; also resets the rigid body's gravity.
    pub fn with_environment(mut self, environment: EnvironmentConfig) -> Self {
        self.set_environment(environment);
        self
    }

    pub fn with_limits(mut self, limits: DeflectionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_control_scheme(mut self, scheme: ControlScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_telemetry_interval(mut self, interval: f64) -> Self {
        self.telemetry_interval = interval;
        self.telemetry_timer = interval;
        self
    }

    pub fn set_environment(&mut self, environment: EnvironmentConfig) {
        self.environment = environment;
        self.rigid_body.set_gravity(environment.gravity_vector());
    }

    pub fn environment(&self) -> &EnvironmentConfig {
        &self.environment
    }

    /// Set stick input; each axis is clamped into [-1, 1].
    pub fn set_controls(&mut self, controls: ControlInput) {
        self.controls = controls.clamped();
    }

    pub fn controls(&self) -> ControlInput {
        self.controls
    }

    /// Set engine throttle, clamped into [0, 1]. NaN is treated as idle.
    pub fn set_throttle(&mut self, throttle: f64) {
        self.engine.throttle = if throttle.is_nan() {
            0.0
        } else {
            throttle.clamp(0.0, 1.0)
        };
    }

    pub fn throttle(&self) -> f64 {
        self.engine.throttle
    }

    pub fn limits(&self) -> &DeflectionLimits {
        &self.limits
    }

    pub fn control_scheme(&self) -> &ControlScheme {
        &self.scheme
    }

    pub fn control_map(&self) -> &ControlSurfaceMap {
        &self.control_map
    }

    pub fn surfaces(&self) -> &[AerodynamicSurface] {
        &self.surfaces
    }

    /// First surface carrying `role`.
    pub fn surface(&self, role: SurfaceRole) -> Option<&AerodynamicSurface> {
        self.surfaces.iter().find(|s| s.role() == role)
    }

    /// Simulated time accumulated through [`Aircraft::update`] [s]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn pose(&self) -> AircraftPose {
        AircraftPose::from(&self.rigid_body)
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::sample(self.elapsed, &self.rigid_body, self.engine.throttle)
    }

    /// Write the current control input onto the surfaces (or, for the direct scheme,
    /// onto the rigid body's torque accumulator).
    pub fn apply_controls(&mut self) {
        match self.scheme {
            ControlScheme::Surfaces => {
                self.control_map
                    .apply(&mut self.surfaces, &self.controls, &self.limits);
            }
            ControlScheme::DirectTorque { .. } => {
                let torque = self
                    .scheme
                    .control_torque(&self.controls, self.rigid_body.speed());
                self.rigid_body.add_relative_torque(torque);
            }
        }
    }

    /// Controls, then every surface in order, then the engine. Leaves the totals in the
    /// rigid body's accumulators without integrating.
    pub fn accumulate_forces(&mut self) {
        self.apply_controls();

        for surface in &self.surfaces {
            surface.apply_forces(&mut self.rigid_body, &self.environment);
        }

        self.engine.apply_forces(&mut self.rigid_body);
    }

    /// Integrate the accumulated forces over `dt` and drain the accumulators.
    pub fn integrate(&mut self, dt: f64) {
        self.rigid_body.update(dt);
        self.elapsed += dt;
    }

    /// One fixed step. Returns a telemetry sample, taken before integration, whenever
    /// more than the telemetry interval of simulated time has passed since the last one.
    pub fn update(&mut self, dt: f64) -> Option<Telemetry> {
        self.accumulate_forces();

        self.telemetry_timer += dt;
        let telemetry = if self.telemetry_timer > self.telemetry_interval {
            self.telemetry_timer = 0.0;
            Some(self.telemetry())
        } else {
            None
        };

        self.integrate(dt);
        telemetry
    }
}
