//! Fuel to CO2-equivalent conversion
//!
//! Combustion CO2 uses IMO tank-to-wake carbon factors. LNG engines also let
//! a share of the gas slip through unburned; that methane is converted to
//! CO2e with its 100-year global warming potential.
//!
//! # Formula
//! ```text
//! CO2e = m_LNG · C_LNG + m_LSFO · C_LSFO + m_LNG · s · GWP₁₀₀
//! ```
//!
//! Where:
//! - **m** = fuel mass burned (t)
//! - **C** = carbon factor (t CO2 / t fuel): 2.75 for LNG, 3.114 for LSFO
//! - **s** = methane slip rate (1% of LNG mass)
//! - **GWP₁₀₀** = methane global warming potential over 100 years (28)
//!
//! # References
//! - IMO MEPC.364(79) (2022). Guidelines on the method of calculation of the attained EEXI/EEDI.
//! - IPCC AR5 (2014). Table 8.7, GWP₁₀₀ of fossil methane.

use crate::core_types::units::Tonnes;
use crate::emissions::fuel::FuelBurn;
use serde::{Deserialize, Serialize};

/// Conversion factors from fuel mass to CO2e mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// t CO2 per t LNG burned
    pub lng: f64,
    /// t CO2 per t liquid fuel burned
    pub liquid_fuel: f64,
    /// Fraction of LNG mass slipping unburned
    pub methane_slip_rate: f64,
    /// 100-year global warming potential of methane
    pub methane_gwp_100: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            lng: 2.75,
            liquid_fuel: 3.114,
            methane_slip_rate: 0.01,
            methane_gwp_100: 28.0,
        }
    }
}

impl EmissionFactors {
    /// CO2e contributed by unburned methane for `lng` tonnes of LNG burned.
    ///
    /// With the default factors this is exactly `lng · 0.28`.
    pub fn methane_slip_co2e(&self, lng: Tonnes) -> Tonnes {
        lng * (self.methane_slip_rate * self.methane_gwp_100)
    }

    /// Total CO2e for a fuel burn, including methane slip
    pub fn co2e(&self, burn: &FuelBurn) -> Tonnes {
        burn.lng * self.lng + burn.liquid_fuel * self.liquid_fuel + self.methane_slip_co2e(burn.lng)
    }
}
