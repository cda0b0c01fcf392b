mod polars;

pub use polars::{naca_0012, naca_2412, NACA_0012_POLAR, NACA_2412_POLAR};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::utils::{lerp, scale, FlightModelError};

/// One row of an airfoil polar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirfoilSample {
    /// Angle of attack [deg]
    pub alpha: f64,
    /// Lift coefficient
    pub cl: f64,
    /// Drag coefficient
    pub cd: f64,
}

impl AirfoilSample {
    pub const fn new(alpha: f64, cl: f64, cd: f64) -> Self {
        Self { alpha, cl, cd }
    }
}

/// How a surface reads coefficients out of its polar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolarLookup {
    /// Nearest-lower sample after linear index mapping.
    #[default]
    Truncate,
    /// Linear interpolation between neighbouring samples.
    Linear,
}

/// Compiled-in polars that can be referenced from configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirfoilKind {
    Naca0012,
    Naca2412,
}

impl AirfoilKind {
    /// The process-wide shared table for this airfoil.
    pub fn table(&self) -> Arc<AirfoilTable> {
        match self {
            AirfoilKind::Naca0012 => naca_0012(),
            AirfoilKind::Naca2412 => naca_2412(),
        }
    }
}

/// Immutable angle-of-attack lookup table, shared by every surface that uses the airfoil.
///
/// Samples are sorted ascending by `alpha`; `min_alpha`/`max_alpha` are cached from
/// the first and last rows. Serialized as the bare sample list and validated on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AirfoilSample>", into = "Vec<AirfoilSample>")]
pub struct AirfoilTable {
    min_alpha: f64,
    max_alpha: f64,
    data: Vec<AirfoilSample>,
}

impl AirfoilTable {
    /// Build a table from polar rows. Rejects empty, non-finite or unsorted data.
    pub fn new(data: Vec<AirfoilSample>) -> Result<Self, FlightModelError> {
        let (first, last) = match (data.first(), data.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(FlightModelError::InvalidAirfoil(
                    "polar must contain at least one sample".into(),
                ))
            }
        };

        if data
            .iter()
            .any(|s| !(s.alpha.is_finite() && s.cl.is_finite() && s.cd.is_finite()))
        {
            return Err(FlightModelError::InvalidAirfoil(
                "polar contains non-finite values".into(),
            ));
        }

        if data.windows(2).any(|w| w[1].alpha < w[0].alpha) {
            return Err(FlightModelError::InvalidAirfoil(
                "polar samples must be sorted by angle of attack".into(),
            ));
        }

        Ok(Self {
            min_alpha: first.alpha,
            max_alpha: last.alpha,
            data,
        })
    }

    pub fn from_slice(data: &[AirfoilSample]) -> Result<Self, FlightModelError> {
        Self::new(data.to_vec())
    }

    pub fn min_alpha(&self) -> f64 {
        self.min_alpha
    }

    pub fn max_alpha(&self) -> f64 {
        self.max_alpha
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn samples(&self) -> &[AirfoilSample] {
        &self.data
    }

    /// Lift and drag coefficients at `alpha` [deg].
    ///
    /// `alpha` is mapped linearly from `[min_alpha, max_alpha]` onto `[0, len)` and
    /// truncated to an index, then clamped into the table. This is a nearest-lower
    /// lookup, not an interpolation; out-of-range angles return the boundary row.
    pub fn sample(&self, alpha: f64) -> (f64, f64) {
        let row = &self.data[self.index_of(alpha)];
        (row.cl, row.cd)
    }

    /// Same mapping as [`sample`](Self::sample), but interpolates between the two
    /// rows bracketing `alpha`. Out-of-range angles still clamp to the boundary rows.
    pub fn sample_linear(&self, alpha: f64) -> (f64, f64) {
        let last = self.data.len() - 1;
        // NaN lands on the first row, matching `sample`.
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if last == 0 || !(alpha > self.min_alpha) {
            let row = &self.data[0];
            return (row.cl, row.cd);
        }
        if alpha >= self.max_alpha {
            let row = &self.data[last];
            return (row.cl, row.cd);
        }

        let upper = self.data.partition_point(|s| s.alpha <= alpha).min(last);
        let lo = &self.data[upper - 1];
        let hi = &self.data[upper];
        let span = hi.alpha - lo.alpha;
        if span <= 0.0 {
            return (lo.cl, lo.cd);
        }
        let t = (alpha - lo.alpha) / span;
        (lerp(lo.cl, hi.cl, t), lerp(lo.cd, hi.cd, t))
    }

    pub fn lookup(&self, alpha: f64, mode: PolarLookup) -> (f64, f64) {
        match mode {
            PolarLookup::Truncate => self.sample(alpha),
            PolarLookup::Linear => self.sample_linear(alpha),
        }
    }

    fn index_of(&self, alpha: f64) -> usize {
        let len = self.data.len();
        if len == 1 || self.max_alpha <= self.min_alpha {
            return 0;
        }
        // `as` saturates and maps NaN to 0, so the clamp below always lands in range.
        let index = scale(alpha, self.min_alpha, self.max_alpha, 0.0, len as f64) as i64;
        index.clamp(0, len as i64 - 1) as usize
    }
}

impl TryFrom<Vec<AirfoilSample>> for AirfoilTable {
    type Error = FlightModelError;

    fn try_from(data: Vec<AirfoilSample>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl From<AirfoilTable> for Vec<AirfoilSample> {
    fn from(table: AirfoilTable) -> Self {
        table.data
    }
}
