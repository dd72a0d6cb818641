//! Destination-specific route overrides
//!
//! The planner has exactly two special cases that depend on where a voyage
//! goes: a per-destination simulated obstacle (height and deviation shift)
//! and a single strait passage that some routes must thread. Both live in
//! one lookup table keyed by destination name so the planner itself stays
//! free of destination-specific branches.

use crate::core_types::coordinate::Coordinate;
use crate::core_types::port::Port;
use crate::core_types::units::Meters;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Axis-aligned lat/lon box with exclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge (exclusive)
    pub min_lat: f64,
    /// Northern edge (exclusive)
    pub max_lat: f64,
    /// Western edge (exclusive)
    pub min_lon: f64,
    /// Eastern edge (exclusive)
    pub max_lon: f64,
}

impl BoundingBox {
    /// Point lies strictly inside the box
    pub fn contains(&self, p: Coordinate) -> bool {
        p.lat > self.min_lat && p.lat < self.max_lat && p.lon > self.min_lon && p.lon < self.max_lon
    }
}

/// A strait that a baseline route crossing its longitude band must pass through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraitPassage {
    /// Strait name, for logs
    pub name: String,
    /// Region the voyage must start in for the rule to apply
    pub start_region: BoundingBox,
    /// Waypoint inserted into the baseline
    pub waypoint: Coordinate,
    /// Western edge of the longitude band the route must cross
    pub west_lon: f64,
    /// Eastern edge of the longitude band the route must cross
    pub east_lon: f64,
}

impl StraitPassage {
    /// Sunda Strait, between Sumatra and Java
    pub fn sunda() -> Self {
        Self {
            name: "Sunda Strait".to_string(),
            start_region: BoundingBox {
                min_lat: -8.0,
                max_lat: 2.0,
                min_lon: 100.0,
                max_lon: 110.0,
            },
            waypoint: Coordinate::new(-5.95, 105.95),
            west_lon: 105.5,
            east_lon: 106.5,
        }
    }

    /// Straight segment crosses the band in either direction and ends
    /// south of the equator
    pub fn crosses(&self, start: Coordinate, destination: Coordinate) -> bool {
        let southern = destination.lat < 0.0;
        let eastbound = start.lon < self.west_lon && destination.lon > self.east_lon;
        let westbound = start.lon > self.east_lon && destination.lon < self.west_lon;
        southern && (eastbound || westbound)
    }

    /// Start region and band crossing both hold
    pub fn applies(&self, start: Coordinate, destination: Coordinate) -> bool {
        self.start_region.contains(start) && self.crosses(start, destination)
    }
}

/// Per-destination planner parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationProfile {
    /// Height of the simulated obstacle placed on routes to this port
    pub forced_hazard_height: Option<Meters>,
    /// Deviation shift replacing the default magnitude, in degrees
    pub shift_magnitude_degrees: Option<f64>,
    /// Routes to this port never take the strait waypoint (far destinations)
    pub bypasses_strait: bool,
}

impl DestinationProfile {
    fn obstacle(height: f64) -> Self {
        Self {
            forced_hazard_height: Some(Meters::new(height)),
            ..Self::default()
        }
    }

    fn with_shift(mut self, shift: f64) -> Self {
        self.shift_magnitude_degrees = Some(shift);
        self
    }

    fn bypassing_strait(mut self) -> Self {
        self.bypasses_strait = true;
        self
    }
}

/// Destination name → override lookup, plus the strait rule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOverrides {
    /// Strait passage rule, if any
    pub strait: Option<StraitPassage>,
    /// Profiles keyed by destination port name
    pub destinations: FxHashMap<String, DestinationProfile>,
}

impl RouteOverrides {
    /// Obstacle table and Sunda Strait rule for the default port catalog.
    ///
    /// Every listed obstacle exceeds the high-wave threshold. Trans-oceanic
    /// routes use a wider shift; a shift at or beyond the 1.5° proximity
    /// threshold (Los Angeles, 1.8°) keeps the hazard out of proximity, so
    /// that destination is forced distinct instead of deviating.
    pub fn default_table() -> Self {
        let destinations = [
            ("Port of Singapore", DestinationProfile::obstacle(4.5)),
            (
                "Port of Rotterdam, Netherlands",
                DestinationProfile::obstacle(5.0).with_shift(1.2).bypassing_strait(),
            ),
            (
                "Port of Shanghai, China",
                DestinationProfile::obstacle(4.8).with_shift(1.2),
            ),
            ("Port of Busan, South Korea", DestinationProfile::obstacle(4.7)),
            (
                "Port of Los Angeles, USA",
                DestinationProfile::obstacle(5.2).with_shift(1.8).bypassing_strait(),
            ),
            ("Port of Jebel Ali, UAE", DestinationProfile::obstacle(4.6)),
            (
                "Port of Hamburg, Germany",
                DestinationProfile::obstacle(5.1).with_shift(1.2).bypassing_strait(),
            ),
        ]
        .into_iter()
        .map(|(name, profile)| (name.to_string(), profile))
        .collect();

        Self {
            strait: Some(StraitPassage::sunda()),
            destinations,
        }
    }

    /// Profile for a destination; the empty profile when not listed
    pub fn profile(&self, destination: &Port) -> DestinationProfile {
        self.destinations
            .get(&destination.name)
            .copied()
            .unwrap_or_default()
    }

    /// Strait waypoint the baseline from `start` to `destination` must take
    pub fn strait_waypoint(&self, start: Coordinate, destination: &Port) -> Option<&StraitPassage> {
        let strait = self.strait.as_ref()?;
        if self.profile(destination).bypasses_strait {
            return None;
        }
        strait
            .applies(start, destination.coordinate())
            .then_some(strait)
    }
}
