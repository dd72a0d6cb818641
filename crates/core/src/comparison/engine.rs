//! Request/response boundary: one voyage in, a baseline/optimal comparison out

use crate::comparison::deltas::PercentDelta;
use crate::comparison::metrics::{ComparisonDeltas, RouteMetrics};
use crate::config::EngineConfig;
use crate::core_types::coordinate::Coordinate;
use crate::core_types::port::{Port, PortCatalog};
use crate::core_types::units::{Knots, Meters};
use crate::core_types::vessel::{FuelBlend, VesselProfile, VoyageParameters};
use crate::error::VoyageError;
use crate::routing::hazard::{HazardOverride, HazardZone};
use crate::routing::overrides::RouteOverrides;
use crate::routing::planner::{PlanOutcome, RoutePlanner};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One voyage to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageRequest {
    /// Current vessel position
    pub start: Option<Coordinate>,
    /// Index into the port catalog
    pub destination_index: usize,
    /// Speed on the baseline route
    pub cruise_speed: Knots,
    /// LNG / liquid fuel split
    #[serde(default)]
    pub fuel_blend: FuelBlend,
    /// Vessel sailing the voyage
    #[serde(default = "VesselProfile::amaryllis_vlgc")]
    pub vessel: VesselProfile,
    /// Hazard replacing the destination's configured obstacle
    #[serde(default)]
    pub hazard_override: Option<HazardOverride>,
}

impl VoyageRequest {
    /// Request for the default vessel with no hazard override
    pub fn new(
        start: Coordinate,
        destination_index: usize,
        cruise_speed: Knots,
        fuel_blend: FuelBlend,
    ) -> Self {
        Self {
            start: Some(start),
            destination_index,
            cruise_speed,
            fuel_blend,
            vessel: VesselProfile::amaryllis_vlgc(),
            hazard_override: None,
        }
    }

    /// Speed and fuel blend
    pub fn parameters(&self) -> VoyageParameters {
        VoyageParameters {
            cruise_speed: self.cruise_speed,
            fuel_blend: self.fuel_blend,
        }
    }

    /// Replace the destination's obstacle with `hazard`
    pub fn with_hazard(mut self, hazard: HazardOverride) -> Self {
        self.hazard_override = Some(hazard);
        self
    }
}

/// Baseline and optimal routes to one destination, measured and compared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageComparison {
    /// Destination port
    pub destination: Port,
    /// Direct route at cruise speed
    pub baseline: RouteMetrics,
    /// Recommended route at reduced speed
    pub optimal: RouteMetrics,
    /// Optimal relative to baseline
    pub deltas: ComparisonDeltas,
    /// Hazards considered for wave exposure
    pub hazards: Vec<HazardZone>,
    /// How the optimal route was obtained
    pub outcome: PlanOutcome,
    /// Human-readable recommendation
    pub recommendation: String,
}

/// Recommendation sentence for a comparison.
///
/// The waypoint clause appears only when the optimal route has interior
/// points; it names the first one.
pub fn recommendation(
    optimal: &RouteMetrics,
    emissions_pct: PercentDelta,
    baseline_wave: Meters,
) -> String {
    let mut text = String::from("Choose the optimal route ");
    if let Some(waypoint) = optimal.path.waypoints().first() {
        text.push_str(&format!("via waypoint {waypoint:.2} "));
    }
    text.push_str(&format!(
        "to reduce emissions by {emissions_pct} and wave height from {baseline_wave:.1} to {:.1}.",
        optimal.wave_height
    ));
    text
}

/// Compares voyages against a port catalog
#[derive(Debug, Clone)]
pub struct VoyageEngine {
    config: EngineConfig,
    catalog: PortCatalog,
    overrides: RouteOverrides,
}

impl Default for VoyageEngine {
    /// Default config, catalog and override table
    fn default() -> Self {
        Self::new(
            EngineConfig::default(),
            PortCatalog::default_catalog(),
            RouteOverrides::default_table(),
        )
    }
}

impl VoyageEngine {
    /// Engine over an explicit config, catalog and override table
    pub fn new(config: EngineConfig, catalog: PortCatalog, overrides: RouteOverrides) -> Self {
        Self {
            config,
            catalog,
            overrides,
        }
    }

    /// Thresholds and emission factors in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ports that destination indices refer to
    pub fn catalog(&self) -> &PortCatalog {
        &self.catalog
    }

    /// Per-destination obstacles and the strait rule
    pub fn overrides(&self) -> &RouteOverrides {
        &self.overrides
    }

    /// Plan, measure and compare one voyage.
    ///
    /// # Errors
    /// - [`VoyageError::MissingPosition`] when the request has no start
    /// - [`VoyageError::InvalidPortIndex`] when the destination is not in the catalog
    /// - [`VoyageError::InvalidParameter`] for a bad speed, fuel blend, vessel,
    ///   hazard or config value
    pub fn compare(&self, request: &VoyageRequest) -> Result<VoyageComparison, VoyageError> {
        let start = request.start.ok_or(VoyageError::MissingPosition)?;
        let destination = self.catalog.get(request.destination_index).ok_or(
            VoyageError::InvalidPortIndex {
                index: request.destination_index,
                catalog_len: self.catalog.len(),
            },
        )?;
        self.validate(start, request)?;
        Ok(self.compare_validated(start, destination, request))
    }

    /// Compare the request against every port in the catalog, in parallel.
    ///
    /// `destination_index` is ignored. Results follow catalog order.
    ///
    /// # Errors
    /// Same as [`VoyageEngine::compare`], except for `InvalidPortIndex`
    pub fn compare_all_destinations(
        &self,
        request: &VoyageRequest,
    ) -> Result<Vec<VoyageComparison>, VoyageError> {
        let start = request.start.ok_or(VoyageError::MissingPosition)?;
        self.validate(start, request)?;
        info!(ports = self.catalog.len(), "Comparing all destinations");
        Ok(self
            .catalog
            .ports()
            .par_iter()
            .map(|destination| self.compare_validated(start, destination, request))
            .collect())
    }

    fn validate(&self, start: Coordinate, request: &VoyageRequest) -> Result<(), VoyageError> {
        if !start.is_finite() {
            return Err(VoyageError::InvalidParameter(format!(
                "start position must be finite, got {start}"
            )));
        }
        request.parameters().validate()?;
        if !request.vessel.deadweight.is_finite() || *request.vessel.deadweight < 0.0 {
            return Err(VoyageError::InvalidParameter(format!(
                "deadweight must be finite and non-negative, got {}",
                *request.vessel.deadweight
            )));
        }
        let rates = &request.vessel.fuel_burn_per_nm;
        for (fuel, rate) in [("lng", rates.lng), ("liquid_fuel", rates.liquid_fuel)] {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(VoyageError::InvalidParameter(format!(
                    "{fuel} burn rate must be finite and non-negative, got {}",
                    *rate
                )));
            }
        }
        if let Some(hazard) = &request.hazard_override {
            let bad_shift = matches!(hazard.shift_magnitude_degrees, Some(s) if !s.is_finite());
            if !hazard.height.is_finite() || bad_shift {
                return Err(VoyageError::InvalidParameter(
                    "hazard override must be finite".to_string(),
                ));
            }
        }
        self.config.validate()
    }

    fn compare_validated(
        &self,
        start: Coordinate,
        destination: &Port,
        request: &VoyageRequest,
    ) -> VoyageComparison {
        let planner = RoutePlanner::new(&self.config, &self.overrides);
        let planned = planner.plan(start, destination, request.hazard_override.as_ref());
        let hazards: Vec<HazardZone> = planned.hazard.into_iter().collect();

        let params = request.parameters();
        let optimal_speed = params.cruise_speed * self.config.optimal_speed_factor;
        let baseline = RouteMetrics::measure(
            planned.baseline,
            params.cruise_speed,
            params.fuel_blend,
            &request.vessel,
            &hazards,
            &self.config,
        );
        let optimal = RouteMetrics::measure(
            planned.optimal,
            optimal_speed,
            params.fuel_blend,
            &request.vessel,
            &hazards,
            &self.config,
        );

        let deltas = ComparisonDeltas::between(&baseline, &optimal);
        let recommendation = recommendation(&optimal, deltas.emissions_pct, baseline.wave_height);
        debug!(
            destination = %destination.name,
            outcome = ?planned.outcome,
            baseline_nm = *baseline.distance,
            optimal_nm = *optimal.distance,
            emissions = %deltas.emissions_pct,
            "Voyage compared"
        );

        VoyageComparison {
            destination: destination.clone(),
            baseline,
            optimal,
            deltas,
            hazards,
            outcome: planned.outcome,
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Tonnes;

    fn singapore_request() -> VoyageRequest {
        VoyageRequest::new(
            Coordinate::new(1.0, 104.0),
            0,
            Knots::new(14.0),
            FuelBlend::default(),
        )
    }

    #[test]
    fn test_missing_position_is_reported_first() {
        let engine = VoyageEngine::default();
        let request = VoyageRequest {
            start: None,
            destination_index: 99,
            ..singapore_request()
        };
        assert_eq!(engine.compare(&request), Err(VoyageError::MissingPosition));
    }

    #[test]
    fn test_invalid_port_index() {
        let engine = VoyageEngine::default();
        let request = VoyageRequest {
            destination_index: 99,
            ..singapore_request()
        };
        assert_eq!(
            engine.compare(&request),
            Err(VoyageError::InvalidPortIndex {
                index: 99,
                catalog_len: 8
            })
        );
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let engine = VoyageEngine::default();
        for speed in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let request = VoyageRequest {
                cruise_speed: Knots::new(speed),
                ..singapore_request()
            };
            assert!(matches!(
                engine.compare(&request),
                Err(VoyageError::InvalidParameter(_))
            ));
        }

        let request = VoyageRequest {
            fuel_blend: FuelBlend::from_lng_fraction(1.5),
            ..singapore_request()
        };
        assert!(matches!(
            engine.compare(&request),
            Err(VoyageError::InvalidParameter(_))
        ));

        let mut request = singapore_request();
        request.vessel.deadweight = Tonnes::new(f64::NAN);
        assert!(matches!(
            engine.compare(&request),
            Err(VoyageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_bad_burn_rates() {
        let engine = VoyageEngine::default();
        for rate in [f64::NAN, f64::INFINITY, -0.1] {
            let mut request = singapore_request();
            request.vessel.fuel_burn_per_nm.lng = Tonnes::new(rate);
            assert!(matches!(
                engine.compare(&request),
                Err(VoyageError::InvalidParameter(_))
            ));

            let mut request = singapore_request();
            request.vessel.fuel_burn_per_nm.liquid_fuel = Tonnes::new(rate);
            assert!(matches!(
                engine.compare_all_destinations(&request),
                Err(VoyageError::InvalidParameter(_))
            ));
        }

        // Zero burn is a valid (if idealised) vessel
        let mut request = singapore_request();
        request.vessel.fuel_burn_per_nm.lng = Tonnes::new(0.0);
        assert!(engine.compare(&request).is_ok());
    }

    #[test]
    fn test_rejects_bad_emission_model_config() {
        let mut exponent = EngineConfig::default();
        exponent.fuel_model.speed_exponent = f64::NAN;
        let mut factor = EngineConfig::default();
        factor.emission_factors.liquid_fuel = -3.114;
        let mut band = EngineConfig::default();
        band.cii_bands.b_below = f64::INFINITY;

        for config in [exponent, factor, band] {
            let engine = VoyageEngine::new(
                config,
                PortCatalog::default_catalog(),
                RouteOverrides::default_table(),
            );
            assert!(matches!(
                engine.compare(&singapore_request()),
                Err(VoyageError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_bad_config_is_rejected() {
        let config = EngineConfig {
            optimal_speed_factor: 0.0,
            ..EngineConfig::default()
        };
        let engine = VoyageEngine::new(
            config,
            PortCatalog::default_catalog(),
            RouteOverrides::default_table(),
        );
        assert!(matches!(
            engine.compare(&singapore_request()),
            Err(VoyageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_singapore_comparison() {
        let engine = VoyageEngine::default();
        let comparison = engine.compare(&singapore_request()).unwrap();

        assert_eq!(comparison.outcome, PlanOutcome::Deviated);
        assert_eq!(comparison.optimal.path.len(), 4);
        assert!(comparison.optimal.distance >= comparison.baseline.distance);
        assert_eq!(comparison.baseline.wave_height, Meters::new(4.5));
        assert_eq!(comparison.hazards.len(), 1);
        assert!(comparison
            .recommendation
            .starts_with("Choose the optimal route via waypoint ["));
        assert!(comparison.recommendation.contains("from 4.5 m to"));
    }

    #[test]
    fn test_recommendation_without_waypoints() {
        let engine = VoyageEngine::new(
            EngineConfig {
                force_distinct_paths: false,
                ..EngineConfig::default()
            },
            PortCatalog::default_catalog(),
            RouteOverrides::default(),
        );
        let comparison = engine.compare(&singapore_request()).unwrap();
        assert_eq!(comparison.outcome, PlanOutcome::Unchanged);
        assert!(comparison.hazards.is_empty());
        assert_eq!(
            comparison.recommendation,
            format!(
                "Choose the optimal route to reduce emissions by {} and wave height from 0.0 m to 0.0 m.",
                comparison.deltas.emissions_pct
            )
        );
    }

    #[test]
    fn test_compare_all_follows_catalog_order() {
        let engine = VoyageEngine::default();
        let request = VoyageRequest {
            destination_index: 1000,
            ..singapore_request()
        };
        let all = engine.compare_all_destinations(&request).unwrap();
        assert_eq!(all.len(), engine.catalog().len());
        for (comparison, port) in all.iter().zip(engine.catalog().ports()) {
            assert_eq!(comparison.destination.name, port.name);
            assert_ne!(comparison.optimal.path, comparison.baseline.path);
        }
    }
}
