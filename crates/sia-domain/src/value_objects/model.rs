//! Model Class Descriptor
//!
//! The host describes each model class it wants indexed with a
//! [`ModelClass`]. Adapter detection conditions inspect it to decide which
//! adapter applies.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRIMARY_KEY;

/// Value Object: Model Class
///
/// Identifies a model class and its lineage. The ancestor list holds markers
/// such as the base class of the mapping library the model is built on,
/// which is what detection conditions usually test for.
///
/// ## Example
///
/// ```rust
/// use sia_domain::value_objects::ModelClass;
///
/// let article = ModelClass::new("Article")
///     .with_ancestor("ApplicationRecord")
///     .with_ancestor("ActiveRecord::Base");
///
/// assert!(article.descends_from("ActiveRecord::Base"));
/// assert!(!article.descends_from("Mongoid::Document"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ModelClass {
    /// Class name
    pub name: String,
    /// Ancestors, nearest first
    #[serde(default)]
    pub ancestors: Vec<String>,
    /// Primary key attribute
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
}

fn default_primary_key() -> String {
    DEFAULT_PRIMARY_KEY.to_string()
}

impl ModelClass {
    /// Create a model class with no known ancestors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
            primary_key: default_primary_key(),
        }
    }

    /// Append an ancestor to the lineage
    pub fn with_ancestor(mut self, ancestor: impl Into<String>) -> Self {
        self.ancestors.push(ancestor.into());
        self
    }

    /// Set the primary key attribute
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the class is `marker` or has it among its ancestors
    pub fn descends_from(&self, marker: &str) -> bool {
        self.name == marker || self.ancestors.iter().any(|a| a == marker)
    }
}

impl std::fmt::Display for ModelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
