//! Default adapter
//!
//! Used for model classes no registered condition matches. It can load
//! records through the generic record source but knows nothing about
//! callbacks or batch reading.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sia_domain::constants::DEFAULT_ADAPTER_NAME;
use sia_domain::error::{Error, Result};
use sia_domain::ports::providers::{
    Adapter, CallbackProvider, ImportProvider, RecordSource, RecordsProvider,
};
use sia_domain::value_objects::{BulkOperation, ImportOptions, LifecycleHook, ModelClass, Record};
use tracing::debug;

use crate::constants::{
    DEFAULT_ADAPTER_DESCRIPTION, FIND_IN_BATCHES_OPERATION, TRANSFORM_OPERATION,
};

/// Loads records by id and returns them in the order the ids were given
///
/// Unknown ids are skipped; an id given twice yields its record twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRecords;

#[async_trait]
impl RecordsProvider for DefaultRecords {
    async fn records(&self, source: &dyn RecordSource, ids: &[String]) -> Result<Vec<Record>> {
        let found = source.find(ids).await?;
        let by_id: HashMap<String, Record> = found
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        // One record per requested id, repeats included
        let records: Vec<Record> = ids.iter().filter_map(|id| by_id.get(id).cloned()).collect();
        debug!(
            source = source.source_name(),
            requested = ids.len(),
            loaded = records.len(),
            "Loaded records"
        );
        Ok(records)
    }
}

/// Installs no lifecycle hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallbacks;

impl CallbackProvider for NoCallbacks {
    fn hooks(&self, _model: &ModelClass) -> Vec<LifecycleHook> {
        Vec::new()
    }
}

/// Importing capability whose operations are all unsupported
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedImporting;

#[async_trait]
impl ImportProvider for UnsupportedImporting {
    async fn find_in_batches(
        &self,
        _source: &dyn RecordSource,
        _options: &ImportOptions,
    ) -> Result<Vec<Vec<Record>>> {
        Err(Error::not_implemented(
            DEFAULT_ADAPTER_NAME,
            FIND_IN_BATCHES_OPERATION,
        ))
    }

    fn transform(&self, _record: &Record) -> Result<BulkOperation> {
        Err(Error::not_implemented(DEFAULT_ADAPTER_NAME, TRANSFORM_OPERATION))
    }
}

/// Fallback adapter
///
/// # Example
///
/// ```rust
/// use sia_domain::Adapter;
/// use sia_providers::DefaultAdapter;
///
/// let adapter = DefaultAdapter::new();
/// assert_eq!(adapter.name(), "default");
/// assert!(adapter.missing_capabilities().is_empty());
/// ```
#[derive(Clone)]
pub struct DefaultAdapter {
    records: Arc<DefaultRecords>,
    callbacks: Arc<NoCallbacks>,
    importing: Arc<UnsupportedImporting>,
}

impl DefaultAdapter {
    /// Create a new default adapter
    pub fn new() -> Self {
        Self {
            records: Arc::new(DefaultRecords),
            callbacks: Arc::new(NoCallbacks),
            importing: Arc::new(UnsupportedImporting),
        }
    }
}

impl Default for DefaultAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DefaultAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultAdapter").finish()
    }
}

impl Adapter for DefaultAdapter {
    fn name(&self) -> &str {
        DEFAULT_ADAPTER_NAME
    }

    fn description(&self) -> &str {
        DEFAULT_ADAPTER_DESCRIPTION
    }

    fn records(&self) -> Option<Arc<dyn RecordsProvider>> {
        Some(Arc::clone(&self.records) as Arc<dyn RecordsProvider>)
    }

    fn callbacks(&self) -> Option<Arc<dyn CallbackProvider>> {
        Some(Arc::clone(&self.callbacks) as Arc<dyn CallbackProvider>)
    }

    fn importing(&self) -> Option<Arc<dyn ImportProvider>> {
        Some(Arc::clone(&self.importing) as Arc<dyn ImportProvider>)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use sia_application::catalog::{ADAPTERS, AdapterEntry};
use sia_domain::constants::DEFAULT_PRIORITY;

/// Factory function for creating default adapter instances.
fn default_adapter_factory() -> Arc<dyn Adapter> {
    Arc::new(DefaultAdapter::new())
}

#[linkme::distributed_slice(ADAPTERS)]
static DEFAULT_ADAPTER: AdapterEntry = AdapterEntry {
    name: DEFAULT_ADAPTER_NAME,
    description: DEFAULT_ADAPTER_DESCRIPTION,
    factory: default_adapter_factory,
    detection: None,
    priority: DEFAULT_PRIORITY,
};
