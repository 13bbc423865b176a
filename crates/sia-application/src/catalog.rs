//! Adapter Catalog
//!
//! Compile-time list of adapters contributed by other crates through the
//! `linkme` crate. An entry can carry a detection condition, in which case
//! [`AdapterRegistry::install_catalog`](crate::registry::AdapterRegistry::install_catalog)
//! registers it automatically; every entry can be picked by name as the
//! registry's fallback adapter.
//!
//! ## Registering an Adapter (in sia-providers)
//!
//! ```ignore
//! use sia_application::catalog::{AdapterEntry, ADAPTERS};
//!
//! #[linkme::distributed_slice(ADAPTERS)]
//! static DOCUMENT_STORE_ADAPTER: AdapterEntry = AdapterEntry {
//!     name: "document_store",
//!     description: "Document store models",
//!     factory: || Arc::new(DocumentStoreAdapter::new()),
//!     detection: Some(|model| model.descends_from("Mongoid::Document")),
//!     priority: DEFAULT_PRIORITY,
//! };
//! ```

use std::sync::Arc;

use sia_domain::{Adapter, Error, ModelClass, Result};

/// Catalog entry for an adapter
pub struct AdapterEntry {
    /// Unique adapter name (e.g., "default", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the adapter
    pub factory: fn() -> Arc<dyn Adapter>,
    /// Condition installed into the registry, `None` for fallback-only adapters
    pub detection: Option<fn(&ModelClass) -> bool>,
    /// Bucket the detection is registered in
    pub priority: i32,
}

// Auto-collection via linkme distributed slices - adapters submit entries at compile time
#[linkme::distributed_slice]
pub static ADAPTERS: [AdapterEntry] = [..];

/// Create the catalog adapter called `name`
///
/// # Returns
/// * `Ok(Arc<dyn Adapter>)` - Created adapter
/// * `Err(Error::Configuration)` - No adapter with that name, listing the available ones
pub fn resolve_adapter(name: &str) -> Result<Arc<dyn Adapter>> {
    if let Some(entry) = ADAPTERS.iter().find(|entry| entry.name == name) {
        return Ok((entry.factory)());
    }

    let available: Vec<&str> = ADAPTERS.iter().map(|entry| entry.name).collect();
    Err(Error::configuration(format!(
        "Unknown adapter '{name}'. Available adapters: {available:?}"
    )))
}

/// List all catalog adapters as (name, description) tuples
pub fn list_adapters() -> Vec<(&'static str, &'static str)> {
    ADAPTERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
