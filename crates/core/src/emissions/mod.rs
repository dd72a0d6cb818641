//! Emissions & rating engine
//!
//! Turns a sailed distance, a speed and a fuel blend into fuel burned per
//! fuel type, CO2-equivalent emissions and a CII rating.

pub mod cii;
pub mod co2e;
pub mod fuel;

pub use cii::{carbon_intensity, CiiBands, CiiGrade, CiiRating, GradeChange};
pub use co2e::EmissionFactors;
pub use fuel::{fuel_burned, fuel_burned_of, FuelBurn, FuelModel};

use crate::config::EngineConfig;
use crate::core_types::units::{Knots, NauticalMiles, Tonnes};
use crate::core_types::vessel::{FuelBlend, VesselProfile};
use serde::{Deserialize, Serialize};

/// Emissions of one route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    /// CO2-equivalent emitted, methane slip included
    pub co2e: Tonnes,
    /// Fuel burned per fuel type
    pub fuel_burned: FuelBurn,
    /// CII value and grade
    pub carbon_intensity: CiiRating,
}

/// Estimate fuel, CO2e and CII for `distance` sailed at `speed`
pub fn estimate(
    distance: NauticalMiles,
    speed: Knots,
    blend: FuelBlend,
    vessel: &VesselProfile,
    config: &EngineConfig,
) -> EmissionsResult {
    let fuel_burned = fuel_burned(
        distance,
        speed,
        blend,
        &vessel.fuel_burn_per_nm,
        &config.fuel_model,
    );
    let co2e = config.emission_factors.co2e(&fuel_burned);
    let carbon_intensity = carbon_intensity(co2e, vessel.deadweight, distance, &config.cii_bands);
    EmissionsResult {
        co2e,
        fuel_burned,
        carbon_intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_estimate_reference_voyage() {
        // 1000 nm at 14 kn, 50/50 on the Amaryllis:
        // LNG 25 t, LSFO 50 t → CO2e = 68.75 + 155.7 + 7 = 231.45 t
        // CII = 231.45e6 / (40000 · 1000) = 5.786 → D
        let result = estimate(
            NauticalMiles::new(1000.0),
            Knots::new(14.0),
            FuelBlend::default(),
            &VesselProfile::amaryllis_vlgc(),
            &EngineConfig::default(),
        );
        assert_relative_eq!(*result.fuel_burned.lng, 25.0, epsilon = 1e-9);
        assert_relative_eq!(*result.fuel_burned.liquid_fuel, 50.0, epsilon = 1e-9);
        assert_relative_eq!(*result.co2e, 231.45, epsilon = 1e-9);
        assert_relative_eq!(result.carbon_intensity.grams_per_ton_mile, 5.78625, epsilon = 1e-9);
        assert_eq!(result.carbon_intensity.grade, CiiGrade::D);
    }

    #[test]
    fn test_slow_pure_lng_voyage_grades_better() {
        let config = EngineConfig::default();
        let vessel = VesselProfile::amaryllis_vlgc();
        let fast = estimate(
            NauticalMiles::new(1000.0),
            Knots::new(14.0),
            FuelBlend::from_lng_fraction(1.0),
            &vessel,
            &config,
        );
        let slow = estimate(
            NauticalMiles::new(1000.0),
            Knots::new(10.0),
            FuelBlend::from_lng_fraction(1.0),
            &vessel,
            &config,
        );
        // 50 t LNG · 3.03 = 151.5 t → 3.7875 g/t·nm → C
        assert_eq!(fast.carbon_intensity.grade, CiiGrade::C);
        assert!(slow.carbon_intensity.grams_per_ton_mile < fast.carbon_intensity.grams_per_ton_mile);
        assert!(slow.carbon_intensity.grade <= fast.carbon_intensity.grade);
    }
}
