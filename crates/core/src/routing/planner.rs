//! Baseline and optimal route planning
//!
//! Planning runs as a short state machine:
//!
//! ```text
//! Baseline ─→ HazardCheck ─┬─→ Deviated ───────┐
//!                          └─→ ForcedDistinct ─┴─→ ensure_distinct ─→ PlannedRoutes
//! ```
//!
//! The baseline is the direct line, plus the strait waypoint where the
//! override table demands one. A hazard taller than the high-wave threshold
//! sitting near the baseline bends the optimal route around it. Otherwise
//! the optimal route is forced apart from the baseline by a small offset so
//! the two plans are always distinguishable. That last step is isolated in
//! [`RoutePlanner::ensure_distinct`] and can be switched off.

use crate::config::EngineConfig;
use crate::core_types::coordinate::{Coordinate, Path};
use crate::core_types::port::Port;
use crate::geometry::{interpolate, perpendicular_offset_with_epsilon};
use crate::routing::hazard::{HazardOverride, HazardZone};
use crate::routing::overrides::RouteOverrides;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Span fractions of the two deviation waypoints
const DEVIATION_FRACTIONS: [f64; 2] = [0.4, 0.6];

/// Span fractions of the two forced-distinct waypoints
const FORCED_DISTINCT_FRACTIONS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

/// How the optimal route was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// Bent around a qualifying hazard
    Deviated,
    /// No qualifying hazard; nudged off the baseline
    ForcedDistinct,
    /// No qualifying hazard and forced-distinct disabled; same as baseline
    Unchanged,
}

/// Baseline and optimal paths for one voyage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoutes {
    /// Direct route, strait waypoint included when required
    pub baseline: Path,
    /// Route recommended instead
    pub optimal: Path,
    /// Hazard placed for this voyage, if the destination or request has one
    pub hazard: Option<HazardZone>,
    /// How `optimal` was obtained
    pub outcome: PlanOutcome,
    /// Shift used for hazard placement and deviation, in degrees
    pub shift_magnitude_degrees: f64,
}

/// Plans baseline and optimal routes against a config and override table
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner<'a> {
    config: &'a EngineConfig,
    overrides: &'a RouteOverrides,
}

impl<'a> RoutePlanner<'a> {
    /// Planner over a config and override table
    pub fn new(config: &'a EngineConfig, overrides: &'a RouteOverrides) -> Self {
        Self { config, overrides }
    }

    /// Run the full planning sequence from `start` to `destination`
    pub fn plan(
        &self,
        start: Coordinate,
        destination: &Port,
        hazard_override: Option<&HazardOverride>,
    ) -> PlannedRoutes {
        let baseline = self.baseline(start, destination);
        let shift = self.shift_magnitude(destination, hazard_override);
        let hazard = self.place_hazard(start, destination, shift, hazard_override);

        let candidate = match hazard {
            Some(ref zone) if self.qualifies(zone, &baseline) => {
                info!(
                    destination = %destination.name,
                    height = *zone.significant_height,
                    shift,
                    "Deviating around high-wave hazard"
                );
                Some(self.deviate(&baseline, shift))
            }
            _ => None,
        };

        let (optimal, outcome) = match candidate {
            Some(path) => (self.ensure_distinct(&baseline, path), PlanOutcome::Deviated),
            None if self.config.force_distinct_paths => (
                self.ensure_distinct(&baseline, baseline.clone()),
                PlanOutcome::ForcedDistinct,
            ),
            None => (baseline.clone(), PlanOutcome::Unchanged),
        };

        PlannedRoutes {
            baseline,
            optimal,
            hazard,
            outcome,
            shift_magnitude_degrees: shift,
        }
    }

    /// Direct route, threading the strait when the override table requires it
    pub fn baseline(&self, start: Coordinate, destination: &Port) -> Path {
        let mut path = Path::direct(start, destination.coordinate());
        if let Some(strait) = self.overrides.strait_waypoint(start, destination) {
            debug!(
                destination = %destination.name,
                strait = %strait.name,
                waypoint = %strait.waypoint,
                "Routing baseline through strait"
            );
            path.insert_waypoint(1, strait.waypoint);
        }
        path
    }

    /// Shift: request override, then destination profile, then config default
    pub fn shift_magnitude(
        &self,
        destination: &Port,
        hazard_override: Option<&HazardOverride>,
    ) -> f64 {
        hazard_override
            .and_then(|o| o.shift_magnitude_degrees)
            .or_else(|| self.overrides.profile(destination).shift_magnitude_degrees)
            .unwrap_or(self.config.default_shift_magnitude_degrees)
    }

    /// Hazard beside the direct line, or `None` when nothing supplies a height
    pub fn place_hazard(
        &self,
        start: Coordinate,
        destination: &Port,
        shift: f64,
        hazard_override: Option<&HazardOverride>,
    ) -> Option<HazardZone> {
        let height = hazard_override
            .map(|o| o.height)
            .or_else(|| self.overrides.profile(destination).forced_hazard_height);
        let Some(height) = height else {
            warn!(destination = %destination.name, "No hazard profile for destination");
            return None;
        };

        let zone = HazardZone::beside_route(
            start,
            destination.coordinate(),
            height,
            shift,
            self.config,
        );
        info!(
            destination = %destination.name,
            center = %zone.center,
            height = *height,
            "Placed hazard zone"
        );
        Some(zone)
    }

    /// Hazard check: tall enough and close enough to the baseline
    pub fn qualifies(&self, hazard: &HazardZone, baseline: &Path) -> bool {
        hazard.is_high_wave(self.config.high_wave_threshold) && hazard.is_near(baseline, self.config)
    }

    /// Four-point route bent `shift` degrees to the left of the direct line.
    ///
    /// Built from the baseline's end points only; an intermediate strait
    /// waypoint is not carried over.
    pub fn deviate(&self, baseline: &Path, shift: f64) -> Path {
        self.offset_route(baseline, DEVIATION_FRACTIONS, shift)
    }

    /// Post-processing: a candidate pointwise-equal to the baseline is
    /// replaced by a route offset by the forced-distinct magnitude.
    pub fn ensure_distinct(&self, baseline: &Path, candidate: Path) -> Path {
        if !self.config.force_distinct_paths || candidate != *baseline {
            return candidate;
        }
        let magnitude = self.config.forced_distinct_magnitude_degrees;
        debug!(magnitude, "Optimal route equals baseline, forcing distinct path");
        self.offset_route(baseline, FORCED_DISTINCT_FRACTIONS, magnitude)
    }

    fn offset_route(&self, baseline: &Path, fractions: [f64; 2], magnitude: f64) -> Path {
        let p0 = baseline.origin();
        let pn = baseline.destination();
        let (d_lat, d_lon) = perpendicular_offset_with_epsilon(
            p0,
            pn,
            magnitude,
            self.config.degenerate_epsilon_degrees,
        );
        let mut path = Path::direct(p0, pn);
        for (i, t) in fractions.into_iter().enumerate() {
            path.insert_waypoint(i + 1, interpolate(p0, pn, t).offset(d_lat, d_lon));
        }
        path
    }
}
