//! Adapter Port
//!
//! An adapter bundles the three capabilities the indexing side needs from a
//! mapping library. The registry stores adapters as `Arc<dyn Adapter>` and
//! hands the resolved one to the caller.
//!
//! Every accessor is a required trait item, so an implementation cannot
//! forget one. Returning `None` marks the capability as deliberately
//! absent; the registry reports such adapters when they are registered and
//! callers asking for the capability get
//! [`Error::CapabilityMissing`](crate::error::Error::CapabilityMissing).

use std::sync::Arc;

use crate::constants::{CALLBACKS_CAPABILITY, IMPORTING_CAPABILITY, RECORDS_CAPABILITY};

use super::{CallbackProvider, ImportProvider, RecordsProvider};

/// Capabilities an adapter can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Record fetching by identifier
    Records,
    /// Lifecycle callbacks for automatic index updates
    Callbacks,
    /// Bulk importing for reindexing
    Importing,
}

impl Capability {
    /// All capabilities, in lookup order
    pub const ALL: [Self; 3] = [Self::Records, Self::Callbacks, Self::Importing];

    /// Well-known capability name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Records => RECORDS_CAPABILITY,
            Self::Callbacks => CALLBACKS_CAPABILITY,
            Self::Importing => IMPORTING_CAPABILITY,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integration strategy for one mapping library
///
/// # Example
///
/// ```ignore
/// struct DocumentStoreAdapter;
///
/// impl Adapter for DocumentStoreAdapter {
///     fn name(&self) -> &str { "document_store" }
///     fn records(&self) -> Option<Arc<dyn RecordsProvider>> { Some(Arc::new(DocumentRecords)) }
///     fn callbacks(&self) -> Option<Arc<dyn CallbackProvider>> { Some(Arc::new(DocumentCallbacks)) }
///     fn importing(&self) -> Option<Arc<dyn ImportProvider>> { Some(Arc::new(DocumentImporting)) }
/// }
/// ```
pub trait Adapter: Send + Sync {
    /// Unique adapter name, the key it is registered under
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str {
        ""
    }

    /// Record fetching capability
    fn records(&self) -> Option<Arc<dyn RecordsProvider>>;

    /// Lifecycle callback capability
    fn callbacks(&self) -> Option<Arc<dyn CallbackProvider>>;

    /// Bulk import capability
    fn importing(&self) -> Option<Arc<dyn ImportProvider>>;

    /// Whether the adapter exposes `capability`
    fn provides(&self, capability: Capability) -> bool {
        match capability {
            Capability::Records => self.records().is_some(),
            Capability::Callbacks => self.callbacks().is_some(),
            Capability::Importing => self.importing().is_some(),
        }
    }

    /// Capabilities the adapter does not expose
    fn missing_capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| !self.provides(*capability))
            .collect()
    }
}
