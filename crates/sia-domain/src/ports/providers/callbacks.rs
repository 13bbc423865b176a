//! Lifecycle Callback Capability

use crate::value_objects::{LifecycleHook, ModelClass};

/// Declares which lifecycle events of a model keep its index in sync
pub trait CallbackProvider: Send + Sync {
    /// Hooks to install on `model`; empty when nothing should be hooked
    fn hooks(&self, model: &ModelClass) -> Vec<LifecycleHook>;
}
