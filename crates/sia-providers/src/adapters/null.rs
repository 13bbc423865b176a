//! Null adapter for testing
//!
//! Every capability is present and does nothing.

use std::sync::Arc;

use async_trait::async_trait;
use sia_domain::constants::NULL_ADAPTER_NAME;
use sia_domain::error::Result;
use sia_domain::ports::providers::{
    Adapter, CallbackProvider, ImportProvider, RecordSource, RecordsProvider,
};
use sia_domain::value_objects::{BulkOperation, ImportOptions, LifecycleHook, ModelClass, Record};

use crate::constants::NULL_ADAPTER_DESCRIPTION;

/// Loads no records
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecords;

#[async_trait]
impl RecordsProvider for NullRecords {
    async fn records(&self, _source: &dyn RecordSource, _ids: &[String]) -> Result<Vec<Record>> {
        Ok(Vec::new())
    }
}

/// Installs no lifecycle hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCallbacks;

impl CallbackProvider for NullCallbacks {
    fn hooks(&self, _model: &ModelClass) -> Vec<LifecycleHook> {
        Vec::new()
    }
}

/// Reads no batches and passes records through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NullImporting;

#[async_trait]
impl ImportProvider for NullImporting {
    async fn find_in_batches(
        &self,
        _source: &dyn RecordSource,
        _options: &ImportOptions,
    ) -> Result<Vec<Vec<Record>>> {
        Ok(Vec::new())
    }

    fn transform(&self, record: &Record) -> Result<BulkOperation> {
        Ok(BulkOperation::Index {
            id: record.id.clone(),
            data: record.document.clone(),
        })
    }
}

/// Null adapter that loads nothing and installs nothing
///
/// Useful for tests that need an adapter without touching a record source.
///
/// # Example
///
/// ```rust
/// use sia_domain::Adapter;
/// use sia_providers::NullAdapter;
///
/// let adapter = NullAdapter::new();
/// assert_eq!(adapter.name(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdapter;

impl NullAdapter {
    /// Create a new null adapter
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for NullAdapter {
    fn name(&self) -> &str {
        NULL_ADAPTER_NAME
    }

    fn description(&self) -> &str {
        NULL_ADAPTER_DESCRIPTION
    }

    fn records(&self) -> Option<Arc<dyn RecordsProvider>> {
        Some(Arc::new(NullRecords))
    }

    fn callbacks(&self) -> Option<Arc<dyn CallbackProvider>> {
        Some(Arc::new(NullCallbacks))
    }

    fn importing(&self) -> Option<Arc<dyn ImportProvider>> {
        Some(Arc::new(NullImporting))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use sia_application::catalog::{ADAPTERS, AdapterEntry};
use sia_domain::constants::DEFAULT_PRIORITY;

/// Factory function for creating null adapter instances.
fn null_adapter_factory() -> Arc<dyn Adapter> {
    Arc::new(NullAdapter::new())
}

#[linkme::distributed_slice(ADAPTERS)]
static NULL_ADAPTER: AdapterEntry = AdapterEntry {
    name: NULL_ADAPTER_NAME,
    description: NULL_ADAPTER_DESCRIPTION,
    factory: null_adapter_factory,
    detection: None,
    priority: DEFAULT_PRIORITY,
};
