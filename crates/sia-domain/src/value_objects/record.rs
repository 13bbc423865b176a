//! Persisted record value object

use serde::{Deserialize, Serialize};

/// Value Object: Record
///
/// A single persisted record as seen by the indexing side: its identifier
/// and the document that gets indexed for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Identifier, stringified primary key
    pub id: String,
    /// Indexed representation of the record
    pub document: serde_json::Value,
}

impl Record {
    /// Create a record
    pub fn new(id: impl Into<String>, document: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            document,
        }
    }
}
