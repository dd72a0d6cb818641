//! Haversine great-circle distance
//!
//! Route distances are great-circle lengths of each leg on a spherical Earth.
//! The path itself is not an orthodromic curve; only the leg lengths are.
//!
//! # Formula
//! ```text
//! h = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! d = R · 2 · atan2(√h, √(1 − h))
//! ```
//!
//! Where:
//! - **φ** = latitude (radians)
//! - **λ** = longitude (radians)
//! - **R** = mean Earth radius (3440 nm)

use crate::core_types::coordinate::{Coordinate, Path};
use crate::core_types::units::NauticalMiles;

/// Mean Earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.0;

/// Great-circle distance between two coordinates.
///
/// Symmetric, and exactly zero for identical coordinates.
///
/// # Example
/// ```
/// use route_emissions_core::core_types::Coordinate;
/// use route_emissions_core::geometry::distance;
///
/// // One degree of latitude is ~60 nm
/// let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
/// assert!((*d - 60.04).abs() < 0.01);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> NauticalMiles {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    NauticalMiles::new(EARTH_RADIUS_NM * central_angle)
}

/// Total length of a path: sum of its leg distances
pub fn path_length(path: &Path) -> NauticalMiles {
    path.segments().map(|(a, b)| distance(a, b)).sum()
}
