//! Geometry & distance: stateless helpers shared by the planner and the
//! emissions engine.

pub mod distance;
pub mod proximity;

pub use distance::{distance, path_length, EARTH_RADIUS_NM};
pub use proximity::{
    interpolate, is_near, is_near_default, is_near_path, is_near_with_epsilon,
    line_distance_degrees, midpoint, perpendicular_offset, perpendicular_offset_with_epsilon,
};
