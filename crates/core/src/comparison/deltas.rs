//! Baseline vs optimal deltas and their display strings

use crate::core_types::units::Hours;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative change from a baseline value to an optimal value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PercentDelta {
    /// Baseline is exactly zero; no meaningful percentage exists
    ZeroBaseline,
    /// `(optimal - baseline) / baseline * 100`
    Change(f64),
}

impl PercentDelta {
    /// Percentage change from `baseline` to `optimal`
    pub fn between(baseline: f64, optimal: f64) -> Self {
        if baseline == 0.0 {
            return PercentDelta::ZeroBaseline;
        }
        let pct = (optimal - baseline) / baseline * 100.0;
        // -0.0 would print as "-0.0%"
        PercentDelta::Change(if pct == 0.0 { 0.0 } else { pct })
    }

    /// Percentage value; zero for a zero baseline
    pub fn percent(&self) -> f64 {
        match self {
            PercentDelta::ZeroBaseline => 0.0,
            PercentDelta::Change(pct) => *pct,
        }
    }
}

impl fmt::Display for PercentDelta {
    /// `"+4.2%"`, `"-3.0%"`, `"+0.0%"`, or `"0%"` for a zero baseline.
    ///
    /// One decimal by default; a format precision overrides it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentDelta::ZeroBaseline => write!(f, "0%"),
            PercentDelta::Change(pct) => {
                let precision = f.precision().unwrap_or(1);
                write!(f, "{:+.*}%", precision, pct)
            }
        }
    }
}

/// Signed one-decimal percentage string, `"0%"` when `a` is zero
pub fn delta_pct(a: f64, b: f64) -> String {
    PercentDelta::between(a, b).to_string()
}

/// `"{days}d {hours}h"`
pub fn format_duration(duration: Hours) -> String {
    let (days, hours) = duration.to_days_and_hours();
    format!("{days}d {hours}h")
}

/// Whole-percent speed change for a speed multiplier, e.g. `"-10%"` for 0.9
pub fn speed_delta(speed_factor: f64) -> String {
    let pct = speed_factor * 100.0 - 100.0;
    let pct = if pct.round() == 0.0 { 0.0 } else { pct };
    format!("{pct:.0}%")
}
