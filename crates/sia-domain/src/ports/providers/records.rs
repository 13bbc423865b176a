//! Record Fetching Capability

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Record;

use super::RecordSource;

/// Loads the records behind a set of search hits
#[async_trait]
pub trait RecordsProvider: Send + Sync {
    /// Load the records for `ids`
    ///
    /// Implementations return records in the order of `ids`, so results line
    /// up with the hits they came from. Identifiers with no stored record are
    /// skipped.
    async fn records(&self, source: &dyn RecordSource, ids: &[String]) -> Result<Vec<Record>>;
}
