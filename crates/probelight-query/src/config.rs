use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse query config RON: {0}")]
    ParseError(String),
}

/// How trilinear sampling produces its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrilinearMode {
    /// Return corner 0's record unblended. Matches the output existing
    /// baked scenes were tuned against.
    #[default]
    LegacyCorner0,
    /// Return the full 8-corner blend.
    Blend,
}

/// Query engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Trilinear sampling when true, nearest-corner otherwise.
    pub use_trilinear: bool,
    pub trilinear_mode: TrilinearMode,
}

impl QueryConfig {
    pub fn trilinear(mode: TrilinearMode) -> Self {
        Self {
            use_trilinear: true,
            trilinear_mode: mode,
        }
    }

    pub fn nearest() -> Self {
        Self::default()
    }
}

/// Parse a query config from a RON string. Missing fields take defaults.
pub fn load_query_config_from_str(ron_str: &str) -> Result<QueryConfig, ConfigError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
