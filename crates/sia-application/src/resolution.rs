//! Adapter Resolution
//!
//! Per-class handle returned by [`AdapterRegistry::from_class`]. It starts
//! unresolved, scans the registry on the first capability access (or an
//! explicit [`adapter`](AdapterResolution::adapter) call) and keeps the
//! result for the rest of its life.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use sia_domain::{
    Adapter, CallbackProvider, Capability, Error, ImportProvider, ModelClass, RecordsProvider,
    Result,
};

use crate::registry::AdapterRegistry;

/// The chosen adapter for one model class
pub struct AdapterResolution<'r> {
    registry: &'r AdapterRegistry,
    model: ModelClass,
    adapter: OnceCell<Arc<dyn Adapter>>,
}

impl<'r> AdapterResolution<'r> {
    pub(crate) fn new(registry: &'r AdapterRegistry, model: ModelClass) -> Self {
        Self {
            registry,
            model,
            adapter: OnceCell::new(),
        }
    }

    /// Model class this handle was created for
    pub fn model(&self) -> &ModelClass {
        &self.model
    }

    /// Whether the registry has been consulted yet
    pub fn is_resolved(&self) -> bool {
        self.adapter.get().is_some()
    }

    /// Resolved adapter, computed once
    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        self.adapter.get_or_init(|| self.registry.resolve(&self.model))
    }

    /// Record fetching capability of the resolved adapter
    pub fn records_provider(&self) -> Result<Arc<dyn RecordsProvider>> {
        let adapter = self.adapter();
        adapter
            .records()
            .ok_or_else(|| Error::capability_missing(adapter.name(), Capability::Records))
    }

    /// Lifecycle callback capability of the resolved adapter
    pub fn callback_provider(&self) -> Result<Arc<dyn CallbackProvider>> {
        let adapter = self.adapter();
        adapter
            .callbacks()
            .ok_or_else(|| Error::capability_missing(adapter.name(), Capability::Callbacks))
    }

    /// Bulk import capability of the resolved adapter
    pub fn import_provider(&self) -> Result<Arc<dyn ImportProvider>> {
        let adapter = self.adapter();
        adapter
            .importing()
            .ok_or_else(|| Error::capability_missing(adapter.name(), Capability::Importing))
    }
}

impl std::fmt::Debug for AdapterResolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterResolution")
            .field("model", &self.model.name)
            .field("adapter", &self.adapter.get().map(|adapter| adapter.name()))
            .finish()
    }
}
