//! Geographic coordinates and route paths.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Degree-space vector (`x` = longitude, `y` = latitude).
///
/// An alias for `nalgebra::Vector2<f64>`, used for the planar approximations
/// the route planner works in (offsets, interpolation, proximity).
pub type DegreeVec = Vector2<f64>;

/// A (latitude, longitude) pair in degrees.
///
/// Latitude in [-90, 90] and longitude in [-180, 180] are assumed, never
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (positive north)
    pub lat: f64,
    /// Longitude in degrees (positive east)
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// View as a degree-space vector (`x` = lon, `y` = lat)
    #[inline]
    #[must_use]
    pub fn to_vector(self) -> DegreeVec {
        DegreeVec::new(self.lon, self.lat)
    }

    /// Build from a degree-space vector (`x` = lon, `y` = lat)
    #[inline]
    #[must_use]
    pub fn from_vector(v: DegreeVec) -> Self {
        Self::new(v.y, v.x)
    }

    /// Shift by a `(d_lat, d_lon)` offset
    #[inline]
    #[must_use]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// Both components are finite numbers
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(f, "[{:.*}, {:.*}]", precision, self.lat, precision, self.lon)
    }
}

/// An ordered route: origin, optional waypoints, destination.
///
/// Equality is pointwise, which is what the planner uses to decide whether
/// an "optimal" path still coincides with its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Path(Vec<Coordinate>);

impl TryFrom<Vec<Coordinate>> for Path {
    type Error = String;

    fn try_from(points: Vec<Coordinate>) -> Result<Self, Self::Error> {
        let count = points.len();
        Path::from_points(points).ok_or_else(|| format!("path needs at least 2 points, got {count}"))
    }
}

impl From<Path> for Vec<Coordinate> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl Path {
    /// Direct two-point path
    #[must_use]
    pub fn direct(origin: Coordinate, destination: Coordinate) -> Self {
        Self(vec![origin, destination])
    }

    /// Build from an explicit point list.
    ///
    /// Returns `None` for fewer than two points.
    #[must_use]
    pub fn from_points(points: Vec<Coordinate>) -> Option<Self> {
        (points.len() >= 2).then_some(Self(points))
    }

    /// All points in order
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    /// Number of points (always >= 2)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First point
    pub fn origin(&self) -> Coordinate {
        self.0[0]
    }

    /// Last point
    pub fn destination(&self) -> Coordinate {
        self.0[self.0.len() - 1]
    }

    /// Interior points, excluding origin and destination
    pub fn waypoints(&self) -> &[Coordinate] {
        &self.0[1..self.0.len() - 1]
    }

    /// Consecutive `(from, to)` segments
    pub fn segments(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Insert a waypoint before the point at `index`.
    ///
    /// `index` is clamped into the interior so origin and destination stay put.
    pub fn insert_waypoint(&mut self, index: usize, waypoint: Coordinate) {
        let index = index.clamp(1, self.0.len() - 1);
        self.0.insert(index, waypoint);
    }
}
