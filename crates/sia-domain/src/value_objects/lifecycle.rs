//! Lifecycle Callback Value Objects
//!
//! A callback capability describes which persistence events of a model
//! should keep the search index in sync, and how.

use serde::{Deserialize, Serialize};

/// Persistence event emitted by the mapping library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Record was created
    Create,
    /// Record was updated
    Update,
    /// Record was destroyed
    Destroy,
}

/// Index operation performed in reaction to a lifecycle event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IndexAction {
    /// Index the whole document
    Index,
    /// Partially update the indexed document
    Update,
    /// Remove the document from the index
    Delete,
}

/// Value Object: Lifecycle Hook
///
/// Pairs a lifecycle event with the index action it triggers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LifecycleHook {
    /// Event that fires the hook
    pub event: LifecycleEvent,
    /// Action run against the index
    pub action: IndexAction,
}

impl LifecycleHook {
    /// Create a hook
    pub fn new(event: LifecycleEvent, action: IndexAction) -> Self {
        Self { event, action }
    }

    /// Create → index, update → update, destroy → delete.
    ///
    /// Hook set for a [`CallbackProvider`](crate::ports::providers::CallbackProvider)
    /// that mirrors every record change into the index. The built-in adapters
    /// install no hooks.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new(LifecycleEvent::Create, IndexAction::Index),
            Self::new(LifecycleEvent::Update, IndexAction::Update),
            Self::new(LifecycleEvent::Destroy, IndexAction::Delete),
        ]
    }
}
