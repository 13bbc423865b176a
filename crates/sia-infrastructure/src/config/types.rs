//! Configuration types

use serde::{Deserialize, Serialize};
use sia_domain::constants::DEFAULT_ADAPTER_NAME;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Adapter registry configuration
    pub registry: RegistryConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Adapter registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Catalog name of the adapter used when no condition matches
    pub default_adapter: String,

    /// Register catalog adapters that declare a detection condition
    pub install_catalog: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_adapter: DEFAULT_ADAPTER_NAME.to_string(),
            install_catalog: true,
        }
    }
}
