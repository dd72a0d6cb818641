//! Route planner: baseline synthesis, hazard placement, deviation and the
//! forced-distinct post-processing step.

pub mod hazard;
pub mod overrides;
pub mod planner;

pub use hazard::{wave_exposure, HazardOverride, HazardZone};
pub use overrides::{BoundingBox, DestinationProfile, RouteOverrides, StraitPassage};
pub use planner::{PlanOutcome, PlannedRoutes, RoutePlanner};
