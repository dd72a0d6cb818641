//! Simulated high-wave hazard zones

use crate::config::EngineConfig;
use crate::core_types::coordinate::{Coordinate, Path};
use crate::core_types::units::Meters;
use crate::geometry::{is_near_path, midpoint, perpendicular_offset_with_epsilon};
use serde::{Deserialize, Serialize};

/// A zone of significant wave height sitting beside a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardZone {
    /// Zone center
    pub center: Coordinate,
    /// Significant wave height inside the zone
    pub significant_height: Meters,
    /// Radius used when drawing the zone; not used for proximity
    pub display_radius: Meters,
}

impl HazardZone {
    /// Place a hazard beside the straight `start → destination` line.
    ///
    /// The center is the coordinate-space midpoint pushed `shift_degrees` to
    /// the right of the direction of travel, the side opposite the one a
    /// deviation bends towards.
    pub fn beside_route(
        start: Coordinate,
        destination: Coordinate,
        height: Meters,
        shift_degrees: f64,
        config: &EngineConfig,
    ) -> Self {
        let (d_lat, d_lon) = perpendicular_offset_with_epsilon(
            start,
            destination,
            shift_degrees,
            config.degenerate_epsilon_degrees,
        );
        Self {
            center: midpoint(start, destination).offset(-d_lat, -d_lon),
            significant_height: height,
            display_radius: config.hazard_display_radius,
        }
    }

    /// Wave height exceeds the threshold (strictly)
    pub fn is_high_wave(&self, threshold: Meters) -> bool {
        self.significant_height > threshold
    }

    /// Center lies near any leg of `path`
    pub fn is_near(&self, path: &Path, config: &EngineConfig) -> bool {
        is_near_path(
            self.center,
            path,
            config.near_line_threshold_degrees,
            config.degenerate_epsilon_degrees,
        )
    }
}

/// Caller-supplied hazard replacing the destination's obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardOverride {
    /// Significant wave height
    pub height: Meters,
    /// Deviation shift in degrees; falls back to the destination or default shift
    #[serde(default)]
    pub shift_magnitude_degrees: Option<f64>,
}

/// Worst wave height a path is exposed to.
///
/// The maximum height among hazards whose center is near the path, or zero
/// when none is.
pub fn wave_exposure(path: &Path, hazards: &[HazardZone], config: &EngineConfig) -> Meters {
    hazards
        .iter()
        .filter(|hazard| hazard.is_near(path, config))
        .map(|hazard| hazard.significant_height)
        .max()
        .unwrap_or(Meters::ZERO)
}
