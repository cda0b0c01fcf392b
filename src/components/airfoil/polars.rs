use std::sync::{Arc, LazyLock};

use super::{AirfoilSample, AirfoilTable};

// Polars sampled every degree from -20 to +20 deg at Re ~ 1e6.

/// Symmetric section used for control surfaces and the tail.
pub const NACA_0012_POLAR: [AirfoilSample; 41] = [
    AirfoilSample::new(-20.0, -1.18, 0.1905),
    AirfoilSample::new(-19.0, -1.24, 0.1492),
    AirfoilSample::new(-18.0, -1.3, 0.1119),
    AirfoilSample::new(-17.0, -1.36, 0.0793),
    AirfoilSample::new(-16.0, -1.42, 0.0518),
    AirfoilSample::new(-15.0, -1.48, 0.0309),
    AirfoilSample::new(-14.0, -1.54, 0.02),
    AirfoilSample::new(-13.0, -1.43, 0.0181),
    AirfoilSample::new(-12.0, -1.32, 0.0163),
    AirfoilSample::new(-11.0, -1.21, 0.0146),
    AirfoilSample::new(-10.0, -1.1, 0.0131),
    AirfoilSample::new(-9.0, -0.99, 0.0117),
    AirfoilSample::new(-8.0, -0.88, 0.0104),
    AirfoilSample::new(-7.0, -0.77, 0.0094),
    AirfoilSample::new(-6.0, -0.66, 0.0084),
    AirfoilSample::new(-5.0, -0.55, 0.0076),
    AirfoilSample::new(-4.0, -0.44, 0.007),
    AirfoilSample::new(-3.0, -0.33, 0.0065),
    AirfoilSample::new(-2.0, -0.22, 0.0061),
    AirfoilSample::new(-1.0, -0.11, 0.0059),
    AirfoilSample::new(0.0, 0.0, 0.0058),
    AirfoilSample::new(1.0, 0.11, 0.0059),
    AirfoilSample::new(2.0, 0.22, 0.0061),
    AirfoilSample::new(3.0, 0.33, 0.0065),
    AirfoilSample::new(4.0, 0.44, 0.007),
    AirfoilSample::new(5.0, 0.55, 0.0076),
    AirfoilSample::new(6.0, 0.66, 0.0084),
    AirfoilSample::new(7.0, 0.77, 0.0094),
    AirfoilSample::new(8.0, 0.88, 0.0104),
    AirfoilSample::new(9.0, 0.99, 0.0117),
    AirfoilSample::new(10.0, 1.1, 0.0131),
    AirfoilSample::new(11.0, 1.21, 0.0146),
    AirfoilSample::new(12.0, 1.32, 0.0163),
    AirfoilSample::new(13.0, 1.43, 0.0181),
    AirfoilSample::new(14.0, 1.54, 0.02),
    AirfoilSample::new(15.0, 1.48, 0.0309),
    AirfoilSample::new(16.0, 1.42, 0.0518),
    AirfoilSample::new(17.0, 1.36, 0.0793),
    AirfoilSample::new(18.0, 1.3, 0.1119),
    AirfoilSample::new(19.0, 1.24, 0.1492),
    AirfoilSample::new(20.0, 1.18, 0.1905),
];

/// Cambered section used for the main wing.
pub const NACA_2412_POLAR: [AirfoilSample; 41] = [
    AirfoilSample::new(-20.0, -0.486, 0.1436),
    AirfoilSample::new(-19.0, -0.556, 0.1061),
    AirfoilSample::new(-18.0, -0.626, 0.0732),
    AirfoilSample::new(-17.0, -0.696, 0.0455),
    AirfoilSample::new(-16.0, -0.766, 0.0244),
    AirfoilSample::new(-15.0, -0.836, 0.0133),
    AirfoilSample::new(-14.0, -0.906, 0.0142),
    AirfoilSample::new(-13.0, -0.976, 0.0152),
    AirfoilSample::new(-12.0, -1.046, 0.0163),
    AirfoilSample::new(-11.0, -0.938, 0.0147),
    AirfoilSample::new(-10.0, -0.83, 0.0132),
    AirfoilSample::new(-9.0, -0.722, 0.0119),
    AirfoilSample::new(-8.0, -0.614, 0.0107),
    AirfoilSample::new(-7.0, -0.506, 0.0096),
    AirfoilSample::new(-6.0, -0.398, 0.0087),
    AirfoilSample::new(-5.0, -0.29, 0.0079),
    AirfoilSample::new(-4.0, -0.182, 0.0073),
    AirfoilSample::new(-3.0, -0.074, 0.0068),
    AirfoilSample::new(-2.0, 0.034, 0.0065),
    AirfoilSample::new(-1.0, 0.142, 0.0063),
    AirfoilSample::new(0.0, 0.25, 0.0062),
    AirfoilSample::new(1.0, 0.358, 0.0063),
    AirfoilSample::new(2.0, 0.466, 0.0065),
    AirfoilSample::new(3.0, 0.574, 0.0068),
    AirfoilSample::new(4.0, 0.682, 0.0073),
    AirfoilSample::new(5.0, 0.79, 0.0079),
    AirfoilSample::new(6.0, 0.898, 0.0087),
    AirfoilSample::new(7.0, 1.006, 0.0096),
    AirfoilSample::new(8.0, 1.114, 0.0107),
    AirfoilSample::new(9.0, 1.222, 0.0119),
    AirfoilSample::new(10.0, 1.33, 0.0132),
    AirfoilSample::new(11.0, 1.438, 0.0147),
    AirfoilSample::new(12.0, 1.546, 0.0163),
    AirfoilSample::new(13.0, 1.654, 0.018),
    AirfoilSample::new(14.0, 1.762, 0.0199),
    AirfoilSample::new(15.0, 1.87, 0.0219),
    AirfoilSample::new(16.0, 1.8, 0.0326),
    AirfoilSample::new(17.0, 1.73, 0.0533),
    AirfoilSample::new(18.0, 1.66, 0.0805),
    AirfoilSample::new(19.0, 1.59, 0.113),
    AirfoilSample::new(20.0, 1.52, 0.15),
];

static NACA_0012: LazyLock<Arc<AirfoilTable>> = LazyLock::new(|| {
    Arc::new(AirfoilTable::from_slice(&NACA_0012_POLAR).expect("NACA 0012 polar is sorted"))
});

static NACA_2412: LazyLock<Arc<AirfoilTable>> = LazyLock::new(|| {
    Arc::new(AirfoilTable::from_slice(&NACA_2412_POLAR).expect("NACA 2412 polar is sorted"))
});

pub fn naca_0012() -> Arc<AirfoilTable> {
    Arc::clone(&NACA_0012)
}

pub fn naca_2412() -> Arc<AirfoilTable> {
    Arc::clone(&NACA_2412)
}
