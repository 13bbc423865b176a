//! In-memory record source
//!
//! Keeps records in insertion order. Data is not persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sia_domain::error::{Error, Result};
use sia_domain::ports::providers::RecordSource;
use sia_domain::value_objects::{ImportOptions, Record};

use crate::constants::IN_MEMORY_SOURCE_NAME;

/// Named filter applied when importing with [`ImportOptions::scope`]
type ScopeFilter = Arc<dyn Fn(&Record) -> bool + Send + Sync>;

/// Ordered in-memory record source
#[derive(Clone)]
pub struct InMemoryRecordSource {
    name: String,
    records: Vec<Record>,
    scopes: HashMap<String, ScopeFilter>,
}

impl InMemoryRecordSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::named(IN_MEMORY_SOURCE_NAME)
    }

    /// Create an empty source reporting `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            scopes: HashMap::new(),
        }
    }

    /// Add a record, replacing any stored record with the same id in place
    pub fn with_record(mut self, record: Record) -> Self {
        match self.records.iter_mut().find(|stored| stored.id == record.id) {
            Some(stored) => *stored = record,
            None => self.records.push(record),
        }
        self
    }

    /// Add every record from `records`
    pub fn with_records(self, records: impl IntoIterator<Item = Record>) -> Self {
        records.into_iter().fold(self, Self::with_record)
    }

    /// Declare a named scope usable from [`ImportOptions::with_scope`]
    pub fn with_scope<F>(mut self, name: impl Into<String>, filter: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.scopes.insert(name.into(), Arc::new(filter));
        self
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are stored
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn scoped(&self, scope: Option<&str>) -> Result<Vec<Record>> {
        let Some(scope) = scope else {
            return Ok(self.records.clone());
        };

        let filter = self
            .scopes
            .get(scope)
            .ok_or_else(|| Error::not_found(format!("scope '{scope}' on source '{}'", self.name)))?;
        Ok(self
            .records
            .iter()
            .filter(|record| filter(record))
            .cloned()
            .collect())
    }
}

impl Default for InMemoryRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryRecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordSource")
            .field("name", &self.name)
            .field("records", &self.records.len())
            .field("scopes", &self.scopes.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    async fn find(&self, ids: &[String]) -> Result<Vec<Record>> {
        Ok(self
            .records
            .iter()
            .filter(|record| ids.contains(&record.id))
            .cloned()
            .collect())
    }

    async fn batches(&self, options: &ImportOptions) -> Result<Vec<Vec<Record>>> {
        options.validate()?;
        let records = self.scoped(options.scope.as_deref())?;
        Ok(records
            .chunks(options.batch_size)
            .map(<[Record]>::to_vec)
            .collect())
    }
}
