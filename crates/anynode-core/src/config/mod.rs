pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::{AnyNodeError, AnyNodeResult};

/// Configuration for the depth-guarded, optionally parallel conversion paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Maximum container nesting accepted by bounded ingest.
    pub max_depth: usize,
    /// List length at or above which collection elements convert in parallel.
    pub parallel_threshold: usize,
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse a TOML string. Missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> AnyNodeResult<Self> {
        toml::from_str(toml_str).map_err(|e| AnyNodeError::ConfigError(e.to_string()))
    }

    pub fn to_toml(&self) -> AnyNodeResult<String> {
        toml::to_string(self).map_err(|e| AnyNodeError::ConfigError(e.to_string()))
    }
}
