//! Vessel reference data and fuel blend parameters.

use crate::core_types::units::{Knots, Tonnes};
use crate::error::VoyageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel types burned by a dual-fuel engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    /// Liquefied natural gas
    Lng,
    /// Liquid fuel oil (low-sulphur fuel oil)
    LiquidFuel,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Lng => write!(f, "LNG"),
            FuelType::LiquidFuel => write!(f, "LSFO"),
        }
    }
}

/// Share of each fuel in the voyage, summing to 1.
///
/// Only the LNG fraction is stored; the liquid fuel share is its complement,
/// which keeps the sum invariant by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelBlend {
    lng_fraction: f64,
}

impl FuelBlend {
    /// Blend from the LNG fraction (0-1)
    #[must_use]
    pub const fn from_lng_fraction(lng_fraction: f64) -> Self {
        Self { lng_fraction }
    }

    /// Blend from an LNG percentage (0-100)
    #[must_use]
    pub fn from_lng_percent(lng_percent: f64) -> Self {
        Self::from_lng_fraction(lng_percent / 100.0)
    }

    /// Blend from a liquid fuel percentage (0-100)
    #[must_use]
    pub fn from_liquid_fuel_percent(liquid_percent: f64) -> Self {
        Self::from_lng_fraction(1.0 - liquid_percent / 100.0)
    }

    /// LNG share (0-1)
    pub fn lng_fraction(&self) -> f64 {
        self.lng_fraction
    }

    /// Liquid fuel share (0-1)
    pub fn liquid_fuel_fraction(&self) -> f64 {
        1.0 - self.lng_fraction
    }

    /// Share of the given fuel type
    pub fn fraction(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Lng => self.lng_fraction(),
            FuelType::LiquidFuel => self.liquid_fuel_fraction(),
        }
    }

    /// Fraction is a finite number in [0, 1]
    pub fn is_valid(&self) -> bool {
        self.lng_fraction.is_finite() && (0.0..=1.0).contains(&self.lng_fraction)
    }
}

impl Default for FuelBlend {
    /// Even 50/50 split
    fn default() -> Self {
        Self::from_lng_fraction(0.5)
    }
}

/// Reference fuel consumption per nautical mile at the reference speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelBurnRates {
    /// LNG tonnes per nautical mile
    pub lng: Tonnes,
    /// Liquid fuel tonnes per nautical mile
    pub liquid_fuel: Tonnes,
}

impl FuelBurnRates {
    /// Rate for the given fuel type
    pub fn rate(&self, fuel: FuelType) -> Tonnes {
        match fuel {
            FuelType::Lng => self.lng,
            FuelType::LiquidFuel => self.liquid_fuel,
        }
    }
}

/// Static vessel specification, read-only to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselProfile {
    /// Vessel name
    pub name: String,
    /// Deadweight capacity, the CII denominator
    pub deadweight: Tonnes,
    /// Reference fuel burn per nautical mile
    pub fuel_burn_per_nm: FuelBurnRates,
    /// Installed energy-saving device, if any
    #[serde(default)]
    pub energy_saving_device: Option<String>,
}

impl VesselProfile {
    /// 40,000 DWT dual-fuel gas carrier fitted with Flettner rotors.
    ///
    /// Burn rates follow IMO Table 2 estimates for a tanker of this size.
    #[must_use]
    pub fn amaryllis_vlgc() -> Self {
        Self {
            name: "Amaryllis VLGC".to_string(),
            deadweight: Tonnes::new(40000.0),
            fuel_burn_per_nm: FuelBurnRates {
                lng: Tonnes::new(0.05),
                liquid_fuel: Tonnes::new(0.1),
            },
            energy_saving_device: Some("Flettner".to_string()),
        }
    }
}

/// Per-voyage operating parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyageParameters {
    /// Cruising speed over ground
    pub cruise_speed: Knots,
    /// LNG / liquid fuel split
    pub fuel_blend: FuelBlend,
}

impl VoyageParameters {
    /// Speed must be a positive finite number and the blend a valid fraction.
    ///
    /// # Errors
    /// Returns [`VoyageError::InvalidParameter`] describing the first bad value
    pub fn validate(&self) -> Result<(), VoyageError> {
        let speed = *self.cruise_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(VoyageError::InvalidParameter(format!(
                "cruise speed must be finite and positive, got {speed}"
            )));
        }
        if !self.fuel_blend.is_valid() {
            return Err(VoyageError::InvalidParameter(format!(
                "LNG fraction must be within [0, 1], got {}",
                self.fuel_blend.lng_fraction()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_fractions_sum_to_one() {
        for pct in [0.0, 25.0, 50.0, 80.0, 100.0] {
            let blend = FuelBlend::from_lng_percent(pct);
            assert!((blend.lng_fraction() + blend.liquid_fuel_fraction() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_blend_from_liquid_percent() {
        let blend = FuelBlend::from_liquid_fuel_percent(70.0);
        assert!((blend.lng_fraction() - 0.3).abs() < 1e-12);
        assert!((blend.fraction(FuelType::LiquidFuel) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_blend_validation() {
        assert!(FuelBlend::from_lng_fraction(0.0).is_valid());
        assert!(FuelBlend::from_lng_fraction(1.0).is_valid());
        assert!(!FuelBlend::from_lng_fraction(1.2).is_valid());
        assert!(!FuelBlend::from_lng_fraction(f64::NAN).is_valid());
    }

    #[test]
    fn test_voyage_parameters_validation() {
        let ok = VoyageParameters {
            cruise_speed: Knots::new(14.0),
            fuel_blend: FuelBlend::default(),
        };
        assert!(ok.validate().is_ok());
        let stopped = VoyageParameters {
            cruise_speed: Knots::new(0.0),
            ..ok
        };
        assert!(matches!(
            stopped.validate(),
            Err(VoyageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_amaryllis_profile() {
        let vessel = VesselProfile::amaryllis_vlgc();
        assert_eq!(*vessel.deadweight, 40000.0);
        assert_eq!(vessel.fuel_burn_per_nm.rate(FuelType::Lng), Tonnes::new(0.05));
        assert_eq!(vessel.fuel_burn_per_nm.rate(FuelType::LiquidFuel), Tonnes::new(0.1));
    }
}
