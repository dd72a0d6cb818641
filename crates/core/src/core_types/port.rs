//! Destination port catalog.

use crate::config::load_json;
use crate::core_types::coordinate::Coordinate;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A destination port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Display name, also the key into the route override table
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Port offers LNG bunkering
    #[serde(default, rename = "hasLNGBunkering", alias = "has_lng_bunkering")]
    pub has_lng_bunkering: bool,
}

impl Port {
    /// Create a port
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, has_lng_bunkering: bool) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            has_lng_bunkering,
        }
    }

    /// Port position
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Ordered list of selectable destination ports.
///
/// Requests refer to destinations by index into this list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortCatalog {
    ports: Vec<Port>,
}

impl PortCatalog {
    /// Catalog from an explicit port list
    pub fn new(ports: Vec<Port>) -> Self {
        Self { ports }
    }

    /// Major international ports the dashboard ships with
    pub fn default_catalog() -> Self {
        Self::new(vec![
            Port::new("Port of Singapore", 1.29, 103.85, true),
            Port::new("Port of Rotterdam, Netherlands", 51.95, 4.14, true),
            Port::new("Port of Shanghai, China", 31.23, 121.49, true),
            Port::new("Port of Busan, South Korea", 35.1, 129.04, true),
            Port::new("Port of Los Angeles, USA", 33.74, -118.27, false),
            Port::new("Port of Jebel Ali, UAE", 25.01, 55.06, false),
            Port::new("Port of Hamburg, Germany", 53.54, 9.98, true),
            Port::new("Port of Tanjung Priok, Indonesia", -6.1, 106.88, false),
        ])
    }

    /// Load a catalog from a JSON array of ports
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Port at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Port> {
        self.ports.get(index)
    }

    /// Number of ports
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Catalog has no ports
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// All ports in catalog order
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Ports offering LNG bunkering, in catalog order
    pub fn lng_bunkering_ports(&self) -> impl Iterator<Item = &Port> + '_ {
        self.ports.iter().filter(|p| p.has_lng_bunkering)
    }
}
