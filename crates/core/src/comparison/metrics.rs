//! Per-route metrics and the deltas between a baseline and its optimal route

use crate::comparison::deltas::{format_duration, PercentDelta};
use crate::config::EngineConfig;
use crate::core_types::coordinate::Path;
use crate::core_types::units::{Hours, Knots, Meters, NauticalMiles, Tonnes};
use crate::core_types::vessel::{FuelBlend, VesselProfile};
use crate::emissions::{self, CiiRating, FuelBurn, GradeChange};
use crate::geometry::path_length;
use crate::routing::hazard::{wave_exposure, HazardZone};
use serde::{Deserialize, Serialize};

/// Everything measured along one route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Route sailed
    pub path: Path,
    /// Great-circle length of the route
    pub distance: NauticalMiles,
    /// Speed sailed at
    pub speed: Knots,
    /// Fuel burned per fuel type
    pub fuel: FuelBurn,
    /// CO2-equivalent emitted
    pub co2e: Tonnes,
    /// Carbon intensity rating
    pub cii: CiiRating,
    /// Worst significant wave height near the route
    pub wave_height: Meters,
    /// Time at sea
    pub duration: Hours,
}

impl RouteMetrics {
    /// Measure `path` sailed at `speed`.
    ///
    /// `speed` must be positive; callers validate it before planning.
    pub fn measure(
        path: Path,
        speed: Knots,
        blend: FuelBlend,
        vessel: &VesselProfile,
        hazards: &[HazardZone],
        config: &EngineConfig,
    ) -> Self {
        let distance = path_length(&path);
        let estimate = emissions::estimate(distance, speed, blend, vessel, config);
        let wave_height = wave_exposure(&path, hazards, config);
        Self {
            path,
            distance,
            speed,
            fuel: estimate.fuel_burned,
            co2e: estimate.co2e,
            cii: estimate.carbon_intensity,
            wave_height,
            duration: distance / speed,
        }
    }

    /// Duration as `"{days}d {hours}h"`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

/// Optimal relative to baseline, metric by metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDeltas {
    /// Route length change
    pub distance_pct: PercentDelta,
    /// CO2e change
    pub emissions_pct: PercentDelta,
    /// Total fuel change
    pub fuel_pct: PercentDelta,
    /// CII letter change
    pub cii_grade_change: GradeChange,
    /// Wave exposure change
    pub wave_pct: PercentDelta,
    /// Time at sea change
    pub duration_pct: PercentDelta,
    /// Speed change; display with `{:.0}`
    pub speed_pct: PercentDelta,
}

impl ComparisonDeltas {
    /// Deltas from `baseline` to `optimal`
    pub fn between(baseline: &RouteMetrics, optimal: &RouteMetrics) -> Self {
        Self {
            distance_pct: PercentDelta::between(*baseline.distance, *optimal.distance),
            emissions_pct: PercentDelta::between(*baseline.co2e, *optimal.co2e),
            fuel_pct: PercentDelta::between(*baseline.fuel.total(), *optimal.fuel.total()),
            cii_grade_change: GradeChange::between(baseline.cii.grade, optimal.cii.grade),
            wave_pct: PercentDelta::between(*baseline.wave_height, *optimal.wave_height),
            duration_pct: PercentDelta::between(*baseline.duration, *optimal.duration),
            speed_pct: PercentDelta::between(*baseline.speed, *optimal.speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::coordinate::Coordinate;
    use approx::assert_relative_eq;

    fn metrics(path: Path, speed: f64, hazards: &[HazardZone]) -> RouteMetrics {
        RouteMetrics::measure(
            path,
            Knots::new(speed),
            FuelBlend::default(),
            &VesselProfile::amaryllis_vlgc(),
            hazards,
            &EngineConfig::default(),
        )
    }

    #[test]
    fn test_measure_one_degree_of_longitude_on_equator() {
        let path = Path::direct(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        let m = metrics(path, 14.0, &[]);
        // 3440 · π/180 ≈ 60.04 nm
        assert_relative_eq!(*m.distance, 3440.0 * std::f64::consts::PI / 180.0, epsilon = 1e-9);
        assert_relative_eq!(*m.duration, *m.distance / 14.0, epsilon = 1e-12);
        assert_eq!(m.wave_height, Meters::ZERO);
        assert_eq!(m.formatted_duration(), "0d 4h");
    }

    #[test]
    fn test_deltas_between_identical_routes_are_zero() {
        let path = Path::direct(Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 3.0));
        let m = metrics(path, 12.0, &[]);
        let deltas = ComparisonDeltas::between(&m, &m);
        assert_eq!(deltas.distance_pct.to_string(), "+0.0%");
        assert_eq!(deltas.emissions_pct.to_string(), "+0.0%");
        assert_eq!(deltas.cii_grade_change, GradeChange::NoChange);
        assert_eq!(deltas.wave_pct, PercentDelta::ZeroBaseline);
    }

    #[test]
    fn test_slower_optimal_route_burns_less() {
        let path = Path::direct(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 5.0));
        let baseline = metrics(path.clone(), 14.0, &[]);
        let optimal = metrics(path, 12.6, &[]);
        let deltas = ComparisonDeltas::between(&baseline, &optimal);
        // Same distance, fuel scales with 0.9^2.8
        assert_relative_eq!(
            deltas.fuel_pct.percent(),
            (0.9_f64.powf(2.8) - 1.0) * 100.0,
            epsilon = 1e-9
        );
        assert_eq!(format!("{:.0}", deltas.speed_pct), "-10%");
        assert!(deltas.duration_pct.percent() > 0.0);
    }
}
