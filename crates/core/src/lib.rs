//! Route Emissions Core Library
//!
//! Compares a direct maritime voyage against an alternative "optimal" route
//! that bends around a simulated high-wave hazard and sails 10% slower.
//! Both routes are measured for distance, fuel burned per fuel type,
//! CO2-equivalent emissions (including LNG methane slip), IMO Carbon
//! Intensity Indicator grade, wave exposure and duration.
//!
//! ## Layout
//!
//! - [`geometry`] - haversine distance and degree-space proximity/offset helpers
//! - [`routing`] - baseline synthesis, hazard placement, deviation and the
//!   forced-distinct step, driven by an explicit [`RouteOverrides`] table
//! - [`emissions`] - speed-dependent fuel burn, CO2e and CII grading
//! - [`comparison`] - paired route metrics, deltas, recommendation text and
//!   the [`VoyageEngine`] request/response boundary
//!
//! ## Example
//!
//! ```
//! use route_emissions_core::{Coordinate, FuelBlend, Knots, VoyageEngine, VoyageRequest};
//!
//! let engine = VoyageEngine::default();
//! let request = VoyageRequest::new(
//!     Coordinate::new(1.0, 104.0),
//!     0, // Port of Singapore
//!     Knots::new(14.0),
//!     FuelBlend::from_lng_percent(50.0),
//! );
//! let comparison = engine.compare(&request)?;
//! assert_eq!(comparison.optimal.path.len(), 4);
//! println!("{}", comparison.recommendation);
//! # Ok::<(), route_emissions_core::VoyageError>(())
//! ```

pub mod comparison;
pub mod config;
pub mod core_types;
pub mod emissions;
pub mod error;
pub mod geometry;
pub mod routing;

pub use comparison::{
    delta_pct, ComparisonDeltas, PercentDelta, RouteMetrics, VoyageComparison, VoyageEngine,
    VoyageRequest,
};
pub use config::EngineConfig;
pub use core_types::{
    Coordinate, FuelBlend, FuelType, Hours, Knots, Meters, NauticalMiles, Path, Port, PortCatalog,
    Tonnes, VesselProfile,
};
pub use emissions::{CiiGrade, CiiRating, EmissionsResult, FuelBurn, GradeChange};
pub use error::{ConfigError, VoyageError};
pub use routing::{HazardOverride, HazardZone, PlanOutcome, PlannedRoutes, RouteOverrides, RoutePlanner};
