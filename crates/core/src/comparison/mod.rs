//! Baseline vs optimal comparison and the engine's request/response boundary.

pub mod deltas;
pub mod engine;
pub mod metrics;

pub use deltas::{delta_pct, format_duration, speed_delta, PercentDelta};
pub use engine::{recommendation, VoyageComparison, VoyageEngine, VoyageRequest};
pub use metrics::{ComparisonDeltas, RouteMetrics};
