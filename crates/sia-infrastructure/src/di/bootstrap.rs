//! Registry Bootstrap
//!
//! Composition root for the adapter registry.
//!
//! ```text
//! AppConfig.registry.default_adapter ──▶ resolve_adapter(name) ──▶ AdapterRegistry::new
//!                                                                        │
//! AppConfig.registry.install_catalog ──▶ install_catalog() ◀─────────────┘
//!                                             ▲
//!                                     ADAPTERS (linkme)
//! ```

use std::sync::Arc;

use sia_application::{AdapterRegistry, resolve_adapter};
use sia_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;

/// Build an adapter registry from configuration
///
/// # Errors
/// * `Error::Configuration` - the configured default adapter is not in the catalog
pub fn bootstrap(config: &AppConfig) -> Result<Arc<AdapterRegistry>> {
    let default = resolve_adapter(&config.registry.default_adapter)?;
    let registry = AdapterRegistry::new(default);

    let installed = if config.registry.install_catalog {
        registry.install_catalog()
    } else {
        0
    };

    info!(
        default_adapter = %config.registry.default_adapter,
        installed,
        "Adapter registry ready"
    );
    Ok(Arc::new(registry))
}
