//! Record Source Port
//!
//! The mapping library's side of a model: where its records live. Adapters
//! receive a source from the host and never reach into storage themselves.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ImportOptions, Record};

/// Access to the stored records of one model class
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Name of the backing store, for logging
    fn source_name(&self) -> &str;

    /// Records whose identifier is in `ids`, in storage order
    async fn find(&self, ids: &[String]) -> Result<Vec<Record>>;

    /// All records, chunked by `options.batch_size`
    async fn batches(&self, options: &ImportOptions) -> Result<Vec<Vec<Record>>>;
}
