//! Semantic unit types for type-safe voyage quantity handling
//!
//! Newtype wrappers keep nautical miles, knots, tonnes, hours and meters
//! from being mixed by accident. Every fuel, emission and duration figure in
//! the engine is derived from these, so the fuel model can never multiply a
//! distance by a speed where a mass was expected.
//!
//! # Design
//! - All quantities use `f64`; route distances and CII values are compared
//!   at two-decimal precision so single precision is not enough
//! - `Deref` to the inner `f64` for ergonomic arithmetic in formulas
//! - Total ordering via `Ord` (`f64::total_cmp`, NaN sorts last)
//! - Serde transparent: a `NauticalMiles(12.5)` serializes as `12.5`
//!
//! # Usage
//! ```
//! use route_emissions_core::core_types::units::{Hours, Knots, NauticalMiles};
//!
//! let leg = NauticalMiles::new(280.0);
//! let speed = Knots::new(14.0);
//! let hours: Hours = leg / speed;
//! assert!((*hours - 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Div, Mul, Sub};

/// Shared trait impls for the `f64` unit newtypes.
///
/// Constructors and unit-specific conversions are written out per type.
macro_rules! scalar_unit {
    ($name:ident, $suffix:literal) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                $name(iter.map(|v| v.0).sum())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.*} {}", precision, self.0, $suffix)
                } else {
                    write!(f, "{} {}", self.0, $suffix)
                }
            }
        }
    };
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in nautical miles (1 nm = 1852 m)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NauticalMiles(f64);

scalar_unit!(NauticalMiles, "nm");

impl NauticalMiles {
    /// Zero distance
    pub const ZERO: NauticalMiles = NauticalMiles(0.0);

    /// Meters per nautical mile (international definition)
    const METERS_PER_NM: f64 = 1852.0;

    /// Create a new distance in nautical miles
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        NauticalMiles(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * Self::METERS_PER_NM)
    }
}

/// Distance (or height) in meters
///
/// Used for significant wave height and hazard display radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

scalar_unit!(Meters, "m");

impl Meters {
    /// Zero height
    pub const ZERO: Meters = Meters(0.0);

    /// Create a new length in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// SPEED
// ============================================================================

/// Speed over ground in knots (nautical miles per hour)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Knots(f64);

scalar_unit!(Knots, "kn");

impl Knots {
    /// Create a new speed in knots
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Knots(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Distance / speed = time, the only cross-unit division the engine needs.
impl Div<Knots> for NauticalMiles {
    type Output = Hours;
    fn div(self, rhs: Knots) -> Hours {
        Hours(self.0 / rhs.0)
    }
}

// ============================================================================
// MASS
// ============================================================================

/// Mass in metric tonnes (fuel burned, CO2e emitted, deadweight)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Tonnes(f64);

scalar_unit!(Tonnes, "t");

impl Tonnes {
    /// Zero mass
    pub const ZERO: Tonnes = Tonnes(0.0);

    /// Grams per tonne
    pub const GRAMS_PER_TONNE: f64 = 1e6;

    /// Create a new mass in tonnes
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Tonnes(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to grams
    #[inline]
    #[must_use]
    pub fn to_grams(self) -> f64 {
        self.0 * Self::GRAMS_PER_TONNE
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Hours(f64);

scalar_unit!(Hours, "h");

impl Hours {
    /// Hours per day
    const HOURS_PER_DAY: f64 = 24.0;

    /// Create a new duration in hours
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Hours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Split into whole days and rounded remaining hours.
    ///
    /// A remainder that rounds up to a full day is carried into the day
    /// count, so `47.6 h` is `(2, 0)` rather than `(1, 24)`.
    #[must_use]
    pub fn to_days_and_hours(self) -> (u64, u64) {
        let total = self.0.max(0.0);
        let mut days = (total / Self::HOURS_PER_DAY).floor() as u64;
        let mut hours = (total % Self::HOURS_PER_DAY).round() as u64;
        if hours >= 24 {
            days += 1;
            hours -= 24;
        }
        (days, hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_over_speed_is_hours() {
        let hours = NauticalMiles::new(336.0) / Knots::new(14.0);
        assert!((*hours - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_nautical_mile_to_meters() {
        assert_eq!(*NauticalMiles::new(2.0).to_meters(), 3704.0);
    }

    #[test]
    fn test_days_and_hours_split() {
        assert_eq!(Hours::new(0.0).to_days_and_hours(), (0, 0));
        assert_eq!(Hours::new(25.4).to_days_and_hours(), (1, 1));
        assert_eq!(Hours::new(60.5).to_days_and_hours(), (2, 13));
    }

    #[test]
    fn test_days_and_hours_carry() {
        assert_eq!(Hours::new(23.6).to_days_and_hours(), (1, 0));
        assert_eq!(Hours::new(47.9).to_days_and_hours(), (2, 0));
    }

    #[test]
    fn test_total_ordering() {
        let a = Tonnes::new(1.0);
        let b = Tonnes::new(2.0);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_sum_and_display() {
        let total: NauticalMiles = [1.5, 2.5].into_iter().map(NauticalMiles::new).sum();
        assert_eq!(total, NauticalMiles::new(4.0));
        assert_eq!(format!("{:.1}", total), "4.0 nm");
        assert_eq!(format!("{}", Meters::new(4.5)), "4.5 m");
    }

    #[test]
    fn test_tonnes_to_grams() {
        assert_eq!(Tonnes::new(2.5).to_grams(), 2_500_000.0);
    }
}
