use nalgebra::Vector3;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Linearly remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// No clamping is applied.
#[inline]
pub fn scale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// m/s to km/h
#[inline]
pub fn kilometer_per_hour(meters_per_second: f64) -> f64 {
    meters_per_second * 3.6
}

/// m/s to knots
#[inline]
pub fn knots(meters_per_second: f64) -> f64 {
    meters_per_second * 1.943_844
}

/// True when every component of the vector is finite.
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
