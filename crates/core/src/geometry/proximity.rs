//! Degree-space proximity and offset helpers
//!
//! These work on raw (lon, lat) degrees as if they were planar coordinates.
//! That is a coarse approximation, good enough for placing a single
//! representative hazard and bending a route around it, and it is what the
//! published dashboard numbers were computed with.

use crate::config::{DEGENERATE_EPSILON_DEGREES, NEAR_LINE_THRESHOLD_DEGREES};
use crate::core_types::coordinate::{Coordinate, DegreeVec, Path};

/// Perpendicular distance (degrees) from `point` to the infinite line through
/// `a` and `b`.
///
/// The line is **not** clamped to the segment: a point beyond either end but
/// on the extended line has distance zero. When `a` and `b` are closer than
/// `epsilon` the line is undefined and the plain distance to `a` is returned.
pub fn line_distance_degrees(point: Coordinate, a: Coordinate, b: Coordinate, epsilon: f64) -> f64 {
    let dir = b.to_vector() - a.to_vector();
    let rel = point.to_vector() - a.to_vector();
    let length = dir.norm();
    if length < epsilon {
        return rel.norm();
    }
    // |dir × rel| / |dir|
    (dir.x * rel.y - dir.y * rel.x).abs() / length
}

/// Coarse hazard-proximity test against one segment.
///
/// True when the perpendicular distance from `point` to the infinite line
/// through the segment is strictly below `threshold_degrees` (1.5° by
/// default). Known limitation: points "before" or "after" the segment but
/// on its extended line count as near.
pub fn is_near(point: Coordinate, segment: [Coordinate; 2], threshold_degrees: f64) -> bool {
    is_near_with_epsilon(point, segment, threshold_degrees, DEGENERATE_EPSILON_DEGREES)
}

/// [`is_near`] with an explicit degenerate-segment epsilon
pub fn is_near_with_epsilon(
    point: Coordinate,
    segment: [Coordinate; 2],
    threshold_degrees: f64,
    epsilon: f64,
) -> bool {
    line_distance_degrees(point, segment[0], segment[1], epsilon) < threshold_degrees
}

/// [`is_near`] with the default 1.5° threshold
pub fn is_near_default(point: Coordinate, segment: [Coordinate; 2]) -> bool {
    is_near(point, segment, NEAR_LINE_THRESHOLD_DEGREES)
}

/// True when `point` is near any leg of `path`
pub fn is_near_path(point: Coordinate, path: &Path, threshold_degrees: f64, epsilon: f64) -> bool {
    path.segments()
        .any(|(a, b)| is_near_with_epsilon(point, [a, b], threshold_degrees, epsilon))
}

/// Offset perpendicular to the `p0 → pn` direction, scaled to `magnitude`.
///
/// Returns `(d_lat, d_lon)`. The offset is the left-hand normal in
/// (lon, lat) space, i.e. the direction rotated 90° counter-clockwise. When
/// `|p0 − pn|` is below `epsilon` there is no direction to be perpendicular
/// to and `(magnitude, magnitude)` is returned instead.
pub fn perpendicular_offset_with_epsilon(
    p0: Coordinate,
    pn: Coordinate,
    magnitude: f64,
    epsilon: f64,
) -> (f64, f64) {
    let dir = pn.to_vector() - p0.to_vector();
    let length = dir.norm();
    if length < epsilon {
        return (magnitude, magnitude);
    }
    let normal = DegreeVec::new(-dir.y, dir.x) * (magnitude / length);
    (normal.y, normal.x)
}

/// [`perpendicular_offset_with_epsilon`] with the default 0.001° epsilon
pub fn perpendicular_offset(p0: Coordinate, pn: Coordinate, magnitude: f64) -> (f64, f64) {
    perpendicular_offset_with_epsilon(p0, pn, magnitude, DEGENERATE_EPSILON_DEGREES)
}

/// Linear interpolation in coordinate space (`t = 0` at `p0`, `t = 1` at `pn`)
pub fn interpolate(p0: Coordinate, pn: Coordinate, t: f64) -> Coordinate {
    let a = p0.to_vector();
    let b = pn.to_vector();
    Coordinate::from_vector(a + (b - a) * t)
}

/// Coordinate-space midpoint
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    interpolate(a, b, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_distance_east_west_line() {
        // Line along the equator, point 1° north
        let d = line_distance_degrees(
            Coordinate::new(1.0, 5.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            DEGENERATE_EPSILON_DEGREES,
        );
        assert_relative_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_is_near_threshold_is_strict() {
        let seg = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0)];
        assert!(is_near(Coordinate::new(1.49, 5.0), seg, 1.5));
        assert!(!is_near(Coordinate::new(1.5, 5.0), seg, 1.5));
        assert!(!is_near(Coordinate::new(-2.0, 5.0), seg, 1.5));
    }

    #[test]
    fn test_is_near_uses_extended_line() {
        // Far past the segment's end, but on its extended line
        let seg = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        assert!(is_near_default(Coordinate::new(0.2, 40.0), seg));
    }

    #[test]
    fn test_is_near_degenerate_segment_falls_back_to_point_distance() {
        let p = Coordinate::new(1.0, 1.0);
        assert!(is_near(Coordinate::new(1.0, 2.0), [p, p], 1.5));
        assert!(!is_near(Coordinate::new(1.0, 3.0), [p, p], 1.5));
    }

    #[test]
    fn test_perpendicular_offset_is_unit_normal() {
        let p0 = Coordinate::new(1.0, 104.0);
        let pn = Coordinate::new(1.29, 103.85);
        let (d_lat, d_lon) = perpendicular_offset(p0, pn, 0.5);

        // Length equals the magnitude
        assert_relative_eq!((d_lat * d_lat + d_lon * d_lon).sqrt(), 0.5, epsilon = 1e-12);

        // Orthogonal to the route direction
        let dir = pn.to_vector() - p0.to_vector();
        assert_relative_eq!(dir.x * d_lon + dir.y * d_lat, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular_offset_rotates_counter_clockwise() {
        // Heading east, left-hand normal points north
        let (d_lat, d_lon) =
            perpendicular_offset(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0), 2.0);
        assert_relative_eq!(d_lat, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d_lon, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular_offset_degenerate_fallback() {
        let p = Coordinate::new(3.0, 3.0);
        assert_eq!(perpendicular_offset(p, p, 0.2), (0.2, 0.2));
        assert_eq!(
            perpendicular_offset(p, Coordinate::new(3.0005, 3.0), 0.2),
            (0.2, 0.2)
        );
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(2.0, 4.0);
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
        assert_eq!(midpoint(a, b), Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_is_near_path_checks_every_leg() {
        let path = Path::from_points(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
        ])
        .unwrap();
        // Far from the first leg's line, close to the second leg's
        let eps = DEGENERATE_EPSILON_DEGREES;
        assert!(is_near_path(Coordinate::new(5.0, 10.5), &path, 1.5, eps));
        assert!(!is_near_path(Coordinate::new(5.0, 5.0), &path, 1.5, eps));
    }

    #[test]
    fn test_epsilon_decides_when_a_segment_is_degenerate() {
        // 0.5° segment along the equator, point 1° north of its start
        let seg = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.5)];
        let point = Coordinate::new(1.0, 20.0);
        // As a line the point is 1° away
        assert!(is_near_with_epsilon(point, seg, 1.5, 0.001));
        // Treated as a point it is ~20° away
        assert!(!is_near_with_epsilon(point, seg, 1.5, 1.0));
    }
}
