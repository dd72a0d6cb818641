//! Carbon Intensity Indicator (CII) rating
//!
//! # Formula
//! ```text
//! CII = CO2e [g] / (DWT [t] · d [nm])
//! ```
//!
//! Reported in grams CO2e per deadweight-tonne-nautical-mile and graded
//! A (best) to D. The grade boundaries are strict upper bounds, evaluated
//! from the loosest band down so a lower value overrides a worse letter:
//!
//! | CII (g/t·nm)   | Grade |
//! |----------------|-------|
//! | `< 2.0`        | A     |
//! | `[2.0, 3.0)`   | B     |
//! | `[3.0, 3.88)`  | C     |
//! | `>= 3.88`      | D     |
//!
//! 3.88 is the IMO reference line for a tanker of this size.
//!
//! # References
//! - IMO MEPC.352(78) (2022). Guidelines on operational carbon intensity indicators.
//! - IMO MEPC.354(78) (2022). Guidelines on the operational carbon intensity rating of ships.

use crate::core_types::units::{NauticalMiles, Tonnes};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds (exclusive) of the C, B and A bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiiBands {
    /// Anything below this is at least C (otherwise D)
    pub c_below: f64,
    /// Anything below this is at least B
    pub b_below: f64,
    /// Anything below this is A
    pub a_below: f64,
}

impl Default for CiiBands {
    fn default() -> Self {
        Self {
            c_below: 3.88,
            b_below: 3.0,
            a_below: 2.0,
        }
    }
}

/// Letter grade, ordered best (A) to worst (D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CiiGrade {
    /// Major superior
    A,
    /// Minor superior
    B,
    /// Moderate
    C,
    /// Minor inferior
    D,
}

impl CiiGrade {
    /// Grade a CII value against the band boundaries
    pub fn from_intensity(cii: f64, bands: &CiiBands) -> Self {
        let mut grade = CiiGrade::D;
        if cii < bands.c_below {
            grade = CiiGrade::C;
        }
        if cii < bands.b_below {
            grade = CiiGrade::B;
        }
        if cii < bands.a_below {
            grade = CiiGrade::A;
        }
        grade
    }

    /// Grade letter
    pub fn letter(self) -> char {
        match self {
            CiiGrade::A => 'A',
            CiiGrade::B => 'B',
            CiiGrade::C => 'C',
            CiiGrade::D => 'D',
        }
    }
}

impl fmt::Display for CiiGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Continuous CII value together with its letter grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiiRating {
    /// g CO2e per deadweight-tonne-nautical-mile
    pub grams_per_ton_mile: f64,
    /// Letter grade
    pub grade: CiiGrade,
}

impl fmt::Display for CiiRating {
    /// `"C (3.45)"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.grade, self.grams_per_ton_mile)
    }
}

/// Rate a voyage.
///
/// A zero (or non-finite) transport work `DWT · d` has no meaningful
/// intensity; it is reported as 0 g/t·nm rather than dividing by zero.
pub fn carbon_intensity(
    co2e: Tonnes,
    deadweight: Tonnes,
    distance: NauticalMiles,
    bands: &CiiBands,
) -> CiiRating {
    let transport_work = *deadweight * *distance;
    let grams_per_ton_mile = if transport_work.is_finite() && transport_work > 0.0 {
        co2e.to_grams() / transport_work
    } else {
        0.0
    };
    CiiRating {
        grams_per_ton_mile,
        grade: CiiGrade::from_intensity(grams_per_ton_mile, bands),
    }
}

/// Change in letter grade between the baseline and optimal routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeChange {
    /// Optimal route earns a better letter
    Improved(CiiGrade),
    /// Optimal route earns a worse letter
    Worsened(CiiGrade),
    /// Same letter
    NoChange,
}

impl GradeChange {
    /// Compare letters only; the numeric CII difference is ignored
    pub fn between(baseline: CiiGrade, optimal: CiiGrade) -> Self {
        match optimal.cmp(&baseline) {
            std::cmp::Ordering::Less => GradeChange::Improved(optimal),
            std::cmp::Ordering::Greater => GradeChange::Worsened(optimal),
            std::cmp::Ordering::Equal => GradeChange::NoChange,
        }
    }
}

impl fmt::Display for GradeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeChange::Improved(g) => write!(f, "Improved to {g}"),
            GradeChange::Worsened(g) => write!(f, "Worsened to {g}"),
            GradeChange::NoChange => write!(f, "No change"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries_are_strict() {
        let bands = CiiBands::default();
        assert_eq!(CiiGrade::from_intensity(3.88, &bands), CiiGrade::D);
        assert_eq!(CiiGrade::from_intensity(3.8799, &bands), CiiGrade::C);
        assert_eq!(CiiGrade::from_intensity(3.0, &bands), CiiGrade::C);
        assert_eq!(CiiGrade::from_intensity(2.9999, &bands), CiiGrade::B);
        assert_eq!(CiiGrade::from_intensity(2.0, &bands), CiiGrade::B);
        assert_eq!(CiiGrade::from_intensity(1.9999, &bands), CiiGrade::A);
        assert_eq!(CiiGrade::from_intensity(0.0, &bands), CiiGrade::A);
        assert_eq!(CiiGrade::from_intensity(12.0, &bands), CiiGrade::D);
    }

    #[test]
    fn test_carbon_intensity_exact_boundaries() {
        // DWT 1e6 t over 1 nm makes CII numerically equal to CO2e in tonnes
        let bands = CiiBands::default();
        let dwt = Tonnes::new(1e6);
        let d = NauticalMiles::new(1.0);
        let at_three = carbon_intensity(Tonnes::new(3.0), dwt, d, &bands);
        assert_eq!(at_three.grams_per_ton_mile, 3.0);
        assert_eq!(at_three.grade, CiiGrade::C);
        let at_two = carbon_intensity(Tonnes::new(2.0), dwt, d, &bands);
        assert_eq!(at_two.grams_per_ton_mile, 2.0);
        assert_eq!(at_two.grade, CiiGrade::B);
    }

    #[test]
    fn test_zero_distance_is_zero_intensity() {
        let rating = carbon_intensity(
            Tonnes::new(5.0),
            Tonnes::new(40000.0),
            NauticalMiles::ZERO,
            &CiiBands::default(),
        );
        assert_eq!(rating.grams_per_ton_mile, 0.0);
        assert_eq!(rating.grade, CiiGrade::A);
    }

    #[test]
    fn test_rating_display() {
        let rating = CiiRating {
            grams_per_ton_mile: 3.4567,
            grade: CiiGrade::C,
        };
        assert_eq!(rating.to_string(), "C (3.46)");
    }

    #[test]
    fn test_grade_change_is_alphabetical() {
        assert_eq!(
            GradeChange::between(CiiGrade::C, CiiGrade::B).to_string(),
            "Improved to B"
        );
        assert_eq!(
            GradeChange::between(CiiGrade::B, CiiGrade::D).to_string(),
            "Worsened to D"
        );
        assert_eq!(
            GradeChange::between(CiiGrade::A, CiiGrade::A).to_string(),
            "No change"
        );
    }
}
