//! Engine tuning constants
//!
//! Every threshold and factor the planner and emissions model use lives in
//! [`EngineConfig`]. The defaults reproduce the dashboard's published model;
//! a JSON file can override any subset of fields (missing fields keep their
//! defaults).

use crate::core_types::units::Meters;
use crate::emissions::{CiiBands, EmissionFactors, FuelModel};
use crate::error::{ConfigError, VoyageError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Significant wave height above which a hazard forces a deviation (m)
pub const HIGH_WAVE_THRESHOLD_M: f64 = 3.0;

/// Perpendicular distance below which a hazard counts as near a route (°)
pub const NEAR_LINE_THRESHOLD_DEGREES: f64 = 1.5;

/// Deviation shift used when the destination has no override (°)
pub const DEFAULT_SHIFT_MAGNITUDE_DEGREES: f64 = 0.5;

/// Offset of the synthetic waypoints that keep paths distinct (°)
pub const FORCED_DISTINCT_MAGNITUDE_DEGREES: f64 = 0.2;

/// Degree-space length below which a direction vector is degenerate (°)
pub const DEGENERATE_EPSILON_DEGREES: f64 = 0.001;

/// Speed multiplier applied on the optimal route (10% slow steaming)
pub const OPTIMAL_SPEED_FACTOR: f64 = 0.9;

/// Radius of the high-wave area drawn around a hazard (m)
pub const HAZARD_DISPLAY_RADIUS_M: f64 = 80000.0;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hazards strictly higher than this trigger a deviation
    pub high_wave_threshold: Meters,
    /// Proximity threshold for the near-line test, in degrees
    pub near_line_threshold_degrees: f64,
    /// Shift magnitude when neither request nor destination overrides it
    pub default_shift_magnitude_degrees: f64,
    /// Offset used by the forced-distinct post-processing step
    pub forced_distinct_magnitude_degrees: f64,
    /// Degenerate direction threshold for offset and proximity math
    pub degenerate_epsilon_degrees: f64,
    /// Speed multiplier for the optimal route
    pub optimal_speed_factor: f64,
    /// Synthesize a distinct optimal path when no deviation happened.
    ///
    /// Disable to assert true route equivalence in the absence of hazards.
    pub force_distinct_paths: bool,
    /// Visualisation radius attached to generated hazards
    pub hazard_display_radius: Meters,
    /// Speed/fuel power law
    pub fuel_model: FuelModel,
    /// Fuel to CO2e conversion
    pub emission_factors: EmissionFactors,
    /// CII letter grade boundaries
    pub cii_bands: CiiBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            high_wave_threshold: Meters::new(HIGH_WAVE_THRESHOLD_M),
            near_line_threshold_degrees: NEAR_LINE_THRESHOLD_DEGREES,
            default_shift_magnitude_degrees: DEFAULT_SHIFT_MAGNITUDE_DEGREES,
            forced_distinct_magnitude_degrees: FORCED_DISTINCT_MAGNITUDE_DEGREES,
            degenerate_epsilon_degrees: DEGENERATE_EPSILON_DEGREES,
            optimal_speed_factor: OPTIMAL_SPEED_FACTOR,
            force_distinct_paths: true,
            hazard_display_radius: Meters::new(HAZARD_DISPLAY_RADIUS_M),
            fuel_model: FuelModel::default(),
            emission_factors: EmissionFactors::default(),
            cii_bands: CiiBands::default(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Check the values that end up as divisors, exponents or emission factors.
    ///
    /// # Errors
    /// Returns [`VoyageError::InvalidParameter`] naming the first bad field
    pub fn validate(&self) -> Result<(), VoyageError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(VoyageError::InvalidParameter(format!(
                    "{name} must be finite and positive, got {value}"
                )))
            }
        };
        positive("fuel_model.reference_speed", *self.fuel_model.reference_speed)?;
        positive("optimal_speed_factor", self.optimal_speed_factor)?;
        positive("degenerate_epsilon_degrees", self.degenerate_epsilon_degrees)?;
        positive("near_line_threshold_degrees", self.near_line_threshold_degrees)?;

        let finite = |name: &str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(VoyageError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )))
            }
        };
        finite("fuel_model.speed_exponent", self.fuel_model.speed_exponent)?;
        finite("cii_bands.c_below", self.cii_bands.c_below)?;
        finite("cii_bands.b_below", self.cii_bands.b_below)?;
        finite("cii_bands.a_below", self.cii_bands.a_below)?;

        let factors = &self.emission_factors;
        for (name, value) in [
            ("emission_factors.lng", factors.lng),
            ("emission_factors.liquid_fuel", factors.liquid_fuel),
            ("emission_factors.methane_slip_rate", factors.methane_slip_rate),
            ("emission_factors.methane_gwp_100", factors.methane_gwp_100),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VoyageError::InvalidParameter(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Read and deserialize a JSON file
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_model() {
        let config = EngineConfig::default();
        assert_eq!(*config.high_wave_threshold, 3.0);
        assert_eq!(config.near_line_threshold_degrees, 1.5);
        assert_eq!(config.optimal_speed_factor, 0.9);
        assert!(config.force_distinct_paths);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"force_distinct_paths": false, "optimal_speed_factor": 0.8}"#)
                .unwrap();
        assert!(!config.force_distinct_paths);
        assert_eq!(config.optimal_speed_factor, 0.8);
        assert_eq!(config.default_shift_magnitude_degrees, 0.5);
        assert_eq!(config.fuel_model, FuelModel::default());
    }

    #[test]
    fn test_validate_rejects_zero_reference_speed() {
        let mut config = EngineConfig::default();
        config.fuel_model.reference_speed = crate::core_types::units::Knots::new(0.0);
        assert!(matches!(
            config.validate(),
            Err(VoyageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_model_values() {
        let mut config = EngineConfig::default();
        config.fuel_model.speed_exponent = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.cii_bands.a_below = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.emission_factors.methane_slip_rate = -0.01;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.emission_factors.methane_slip_rate = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load("/nonexistent/engine.json");
        assert!(matches!(result, Err(ConfigError::LoadFailed(_))));
    }
}
