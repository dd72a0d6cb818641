//! Engine error types.

/// Errors that abort a voyage comparison.
///
/// Degenerate geometry (start and destination coinciding) is not an error:
/// the geometry layer substitutes epsilon fallbacks and the comparison
/// completes.
#[derive(Debug, Clone, PartialEq)]
pub enum VoyageError {
    /// Destination index does not exist in the port catalog
    InvalidPortIndex {
        /// Requested index
        index: usize,
        /// Number of ports in the catalog
        catalog_len: usize,
    },
    /// No start position was supplied
    MissingPosition,
    /// A numeric input is outside its domain (speed, fuel fraction, config)
    InvalidParameter(String),
}

impl std::fmt::Display for VoyageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoyageError::InvalidPortIndex { index, catalog_len } => write!(
                f,
                "Port index {index} not found (catalog has {catalog_len} ports)"
            ),
            VoyageError::MissingPosition => write!(f, "No start position supplied"),
            VoyageError::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for VoyageError {}

/// Errors loading engine configuration or reference data
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file
    LoadFailed(String),
    /// Failed to parse the file contents
    ParseFailed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ConfigError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
