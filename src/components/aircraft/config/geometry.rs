use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aerodynamics::{AerodynamicSurface, SurfaceRole};
use crate::components::airfoil::{AirfoilKind, PolarLookup};
use crate::utils::{right, up, FlightModelError};

fn one() -> f64 {
    1.0
}

/// One lifting surface as written in an aircraft file.
///
/// Size is given either as `area` or as `span` and `chord`; `area` wins when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub role: SurfaceRole,
    /// Attachment point in body coordinates (m)
    pub position: Vector3<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<f64>,
    pub airfoil: AirfoilKind,
    /// Neutral normal, defaults to body up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<Vector3<f64>>,
    #[serde(default = "one")]
    pub lift_multiplier: f64,
    #[serde(default = "one")]
    pub drag_multiplier: f64,
    #[serde(default)]
    pub lookup: PolarLookup,
}

impl SurfaceConfig {
    pub fn from_span_chord(
        role: SurfaceRole,
        position: Vector3<f64>,
        span: f64,
        chord: f64,
        airfoil: AirfoilKind,
    ) -> Self {
        Self {
            role,
            position,
            area: None,
            span: Some(span),
            chord: Some(chord),
            airfoil,
            normal: None,
            lift_multiplier: 1.0,
            drag_multiplier: 1.0,
            lookup: PolarLookup::default(),
        }
    }

    pub fn with_normal(mut self, normal: Vector3<f64>) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Reference area (m²).
    pub fn area(&self) -> Result<f64, FlightModelError> {
        match (self.area, self.span, self.chord) {
            (Some(area), _, _) => Ok(area),
            (None, Some(span), Some(chord)) => Ok(span * chord),
            _ => Err(FlightModelError::InvalidSurface(format!(
                "{:?} surface needs either `area` or both `span` and `chord`",
                self.role
            ))),
        }
    }

    pub fn build(&self) -> Result<AerodynamicSurface, FlightModelError> {
        let surface = AerodynamicSurface::new(
            self.position,
            self.area()?,
            self.airfoil.table(),
            self.normal.unwrap_or_else(up),
        )?;
        Ok(surface
            .with_role(self.role)
            .with_multipliers(self.lift_multiplier, self.drag_multiplier)
            .with_lookup(self.lookup))
    }
}

/// Surface layout of the single-engine trainer.
///
/// Order is left wing, left aileron, right aileron, right wing, elevator, rudder, which
/// also satisfies the fixed index layout for untagged lists.
pub fn trainer_surfaces() -> Vec<SurfaceConfig> {
    let wing_offset = -1.0;
    let tail_offset = -6.6;

    vec![
        SurfaceConfig::from_span_chord(
            SurfaceRole::Wing,
            Vector3::new(wing_offset, 0.0, -2.7),
            6.96,
            2.50,
            AirfoilKind::Naca2412,
        ),
        SurfaceConfig::from_span_chord(
            SurfaceRole::LeftAileron,
            Vector3::new(wing_offset - 1.5, 0.0, -2.0),
            3.80,
            1.26,
            AirfoilKind::Naca0012,
        ),
        SurfaceConfig::from_span_chord(
            SurfaceRole::RightAileron,
            Vector3::new(wing_offset - 1.5, 0.0, 2.0),
            3.80,
            1.26,
            AirfoilKind::Naca0012,
        ),
        SurfaceConfig::from_span_chord(
            SurfaceRole::Wing,
            Vector3::new(wing_offset, 0.0, 2.7),
            6.96,
            2.50,
            AirfoilKind::Naca2412,
        ),
        SurfaceConfig::from_span_chord(
            SurfaceRole::Elevator,
            Vector3::new(tail_offset, -0.1, 0.0),
            6.54,
            2.70,
            AirfoilKind::Naca0012,
        ),
        SurfaceConfig::from_span_chord(
            SurfaceRole::Rudder,
            Vector3::new(tail_offset, 0.0, 0.0),
            5.31,
            3.10,
            AirfoilKind::Naca0012,
        )
        .with_normal(right()),
    ]
}
