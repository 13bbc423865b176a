//! Structured logging with tracing
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`. The
//! `SIA_LOG` environment variable overrides the configured level.

use sia_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;
use crate::error_ext::ErrorContext;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails with a configuration error when a global subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| level_filter(level));

    // Layer types differ per format so each branch installs its own stack
    let registry = Registry::default().with(filter);
    if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        registry
            .with(stdout)
            .try_init()
            .config_context("Failed to initialize logging")?;
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        registry
            .with(stdout)
            .try_init()
            .config_context("Failed to initialize logging")?;
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Filter admitting events at `level` and above
///
/// Built from the parsed [`Level`] so that aliases such as `"warning"` are
/// not read as a target name.
pub fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::default().add_directive(level.into())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
