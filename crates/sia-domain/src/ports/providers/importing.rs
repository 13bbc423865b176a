//! Bulk Import Capability

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{BulkOperation, ImportOptions, Record};

use super::RecordSource;

/// Reads a model's records in batches for reindexing
#[async_trait]
pub trait ImportProvider: Send + Sync {
    /// Read every record of `source` in batches of `options.batch_size`
    async fn find_in_batches(
        &self,
        source: &dyn RecordSource,
        options: &ImportOptions,
    ) -> Result<Vec<Vec<Record>>>;

    /// Turn one record into the bulk operation that indexes it
    fn transform(&self, record: &Record) -> Result<BulkOperation>;
}
