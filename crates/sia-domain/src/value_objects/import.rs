//! Bulk Import Value Objects

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_IMPORT_BATCH_SIZE;
use crate::error::{Error, Result};

/// Options controlling how records are read in batches for importing
///
/// # Example
///
/// ```rust
/// use sia_domain::value_objects::ImportOptions;
///
/// let options = ImportOptions::new().with_batch_size(250).with_scope("published");
/// assert_eq!(options.batch_size, 250);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportOptions {
    /// Records per batch
    pub batch_size: usize,
    /// Named scope restricting which records are imported
    pub scope: Option<String>,
}

impl ImportOptions {
    /// Create options with the default batch size
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_IMPORT_BATCH_SIZE,
            scope: None,
        }
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Restrict the import to a named scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Reject options no record source can honour
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::configuration("Import batch size cannot be 0"));
        }
        Ok(())
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Single bulk-API action produced by an import capability
///
/// Serializes in the bulk request shape, e.g.
/// `{"index": {"_id": "1", "data": {...}}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BulkOperation {
    /// Index (create or replace) a document
    Index {
        /// Document identifier
        #[serde(rename = "_id")]
        id: String,
        /// Document body
        data: serde_json::Value,
    },
    /// Delete a document
    Delete {
        /// Document identifier
        #[serde(rename = "_id")]
        id: String,
    },
}

impl BulkOperation {
    /// Identifier the operation targets
    pub fn id(&self) -> &str {
        match self {
            Self::Index { id, .. } | Self::Delete { id } => id,
        }
    }
}
