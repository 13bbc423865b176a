//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the adapter registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration through Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`di`] | Registry bootstrap from configuration |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Centralized configuration constants |

// Force linkme registration of the built-in adapters
extern crate sia_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use di::bootstrap;
pub use error_ext::ErrorContext;
pub use logging::init_logging;
