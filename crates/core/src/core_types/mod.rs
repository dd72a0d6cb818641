//! Core types and utilities

pub mod coordinate;
pub mod port;
pub mod units;
pub mod vessel;

pub use coordinate::{Coordinate, DegreeVec, Path};
pub use port::{Port, PortCatalog};
pub use units::*;
pub use vessel::{FuelBlend, FuelBurnRates, FuelType, VesselProfile, VoyageParameters};
