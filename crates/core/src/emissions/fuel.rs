//! Speed-dependent fuel burn model
//!
//! Propulsion power grows roughly with the cube of speed through water, so
//! fuel burned per mile grows with a slightly lower exponent once the longer
//! time at sea is accounted for. The engine uses an empirical power law
//! anchored at a reference speed.
//!
//! # Formula
//! ```text
//! F = r · d · f · (v / v_ref)^k
//! ```
//!
//! Where:
//! - **F** = fuel burned (t)
//! - **r** = reference burn rate for the fuel type (t/nm at `v_ref`)
//! - **d** = distance sailed (nm)
//! - **f** = share of this fuel in the blend (0-1)
//! - **v** = speed over ground (kn)
//! - **`v_ref`** = reference speed (14 kn)
//! - **k** = speed exponent (2.8)
//!
//! # References
//! - IMO (2020). Fourth IMO GHG Study, Annex on speed/power relationships.
//! - Adland, R. et al. (2020). "Optimal ship speed and the cubic law revisited:
//!   Empirical evidence from an oil tanker fleet." Transportation Research Part E.

use crate::core_types::units::{Knots, NauticalMiles, Tonnes};
use crate::core_types::vessel::{FuelBlend, FuelBurnRates, FuelType};
use serde::{Deserialize, Serialize};

/// Reference speed the burn rates are quoted at (kn)
pub const REFERENCE_SPEED_KNOTS: f64 = 14.0;

/// Empirical speed exponent of fuel burn per mile
pub const SPEED_EXPONENT: f64 = 2.8;

/// Power-law parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelModel {
    /// Speed at which the vessel's burn rates apply
    pub reference_speed: Knots,
    /// Exponent applied to the speed ratio
    pub speed_exponent: f64,
}

impl Default for FuelModel {
    fn default() -> Self {
        Self {
            reference_speed: Knots::new(REFERENCE_SPEED_KNOTS),
            speed_exponent: SPEED_EXPONENT,
        }
    }
}

impl FuelModel {
    /// Dimensionless multiplier `(v / v_ref)^k`
    ///
    /// Equal to 1 at the reference speed; below 1 when slow steaming.
    pub fn speed_factor(&self, speed: Knots) -> f64 {
        (*speed / *self.reference_speed).powf(self.speed_exponent)
    }
}

/// Fuel mass burned, per fuel type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelBurn {
    /// LNG burned
    pub lng: Tonnes,
    /// Liquid fuel burned
    pub liquid_fuel: Tonnes,
}

impl FuelBurn {
    /// Combined mass of both fuels
    pub fn total(&self) -> Tonnes {
        self.lng + self.liquid_fuel
    }

    /// Mass of the given fuel type
    pub fn of(&self, fuel: FuelType) -> Tonnes {
        match fuel {
            FuelType::Lng => self.lng,
            FuelType::LiquidFuel => self.liquid_fuel,
        }
    }
}

/// Fuel burned by one fuel type over `distance` at `speed`
pub fn fuel_burned_of(
    fuel: FuelType,
    distance: NauticalMiles,
    speed: Knots,
    blend: FuelBlend,
    rates: &FuelBurnRates,
    model: &FuelModel,
) -> Tonnes {
    rates.rate(fuel) * (*distance * blend.fraction(fuel) * model.speed_factor(speed))
}

/// Fuel burned by both fuel types over `distance` at `speed`
pub fn fuel_burned(
    distance: NauticalMiles,
    speed: Knots,
    blend: FuelBlend,
    rates: &FuelBurnRates,
    model: &FuelModel,
) -> FuelBurn {
    FuelBurn {
        lng: fuel_burned_of(FuelType::Lng, distance, speed, blend, rates, model),
        liquid_fuel: fuel_burned_of(FuelType::LiquidFuel, distance, speed, blend, rates, model),
    }
}
