//! Adapter Registry
//!
//! Ordered, overridable mapping from detection condition to adapter.
//!
//! ## Ordering
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ bucket 9999 (push)   │ B ─▶ C                             │  evaluated first
//! ├──────────────────────┼────────────────────────────────────┤
//! │ bucket 0 (default)   │ A ─▶ D                             │
//! ├──────────────────────┼────────────────────────────────────┤
//! │ bucket -10           │ E                                  │  evaluated last
//! └───────────────────────────────────────────────────────────┘
//!                 effective order: B, C, A, D, E
//! ```
//!
//! Buckets are walked from the highest priority down; inside a bucket
//! entries keep their insertion order. When the same adapter name sits in
//! several buckets, the entry from the higher bucket is kept and the lower
//! ones are shadowed.
//!
//! ## Concurrency
//!
//! The bucket map is published as an immutable snapshot behind an
//! [`ArcSwap`]. Registration applies read-copy-update, so concurrent
//! registrations are never lost, and resolution reads a consistent snapshot
//! without taking a lock.

pub mod conditions;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use sia_domain::constants::{DEFAULT_PRIORITY, PUSH_PRIORITY};
use sia_domain::{Adapter, ModelClass};
use tracing::{debug, info, warn};

use crate::catalog::ADAPTERS;
use crate::resolution::AdapterResolution;

/// Detection condition deciding whether an adapter applies to a model class
pub type Condition = Arc<dyn Fn(&ModelClass) -> bool + Send + Sync>;

/// Effective registrations keyed by adapter name, in evaluation order
pub type Registrations = IndexMap<String, RegisteredAdapter>;

/// A single (condition, adapter) registration
#[derive(Clone)]
pub struct RegisteredAdapter {
    adapter: Arc<dyn Adapter>,
    condition: Condition,
    priority: i32,
}

impl RegisteredAdapter {
    /// Name the adapter is registered under
    pub fn name(&self) -> &str {
        self.adapter.name()
    }

    /// Registered adapter
    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.adapter
    }

    /// Bucket the registration lives in
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Evaluate the detection condition against `model`
    pub fn matches(&self, model: &ModelClass) -> bool {
        (self.condition)(model)
    }
}

impl std::fmt::Debug for RegisteredAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredAdapter")
            .field("adapter", &self.adapter.name())
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default)]
struct RegistrySnapshot {
    buckets: BTreeMap<i32, IndexMap<String, RegisteredAdapter>>,
}

impl RegistrySnapshot {
    /// Registrations in evaluation order, shadowed names skipped
    fn effective(&self) -> impl Iterator<Item = &RegisteredAdapter> {
        let mut seen = HashSet::new();
        self.buckets
            .values()
            .rev()
            .flat_map(|bucket| bucket.iter())
            .filter(move |(name, _)| seen.insert(*name))
            .map(|(_, registration)| registration)
    }
}

/// Registry selecting the adapter for each model class
///
/// Owned by the host and passed where needed; construct a fresh one per
/// test instead of resetting shared state.
///
/// # Example
///
/// ```ignore
/// let registry = AdapterRegistry::new(Arc::new(DefaultAdapter::new()));
/// registry.register(Arc::new(RelationalAdapter), conditions::descends_from("ActiveRecord::Base"));
///
/// let resolution = registry.from_class(ModelClass::new("Article").with_ancestor("ActiveRecord::Base"));
/// let records = resolution.records_provider()?;
/// ```
pub struct AdapterRegistry {
    snapshot: ArcSwap<RegistrySnapshot>,
    default: Arc<dyn Adapter>,
}

impl AdapterRegistry {
    /// Create an empty registry falling back to `default`
    pub fn new(default: Arc<dyn Adapter>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(RegistrySnapshot::default()),
            default,
        }
    }

    /// Register `adapter` in the default bucket
    pub fn register<F>(&self, adapter: Arc<dyn Adapter>, condition: F)
    where
        F: Fn(&ModelClass) -> bool + Send + Sync + 'static,
    {
        self.register_with_priority(adapter, condition, DEFAULT_PRIORITY);
    }

    /// Register `adapter` in bucket `priority`
    ///
    /// Re-registering a name within the same bucket replaces its condition
    /// and adapter but keeps the entry's position. The same name may be
    /// registered in other buckets independently.
    pub fn register_with_priority<F>(
        &self,
        adapter: Arc<dyn Adapter>,
        condition: F,
        priority: i32,
    ) where
        F: Fn(&ModelClass) -> bool + Send + Sync + 'static,
    {
        let name = adapter.name().to_string();

        let missing = adapter.missing_capabilities();
        if !missing.is_empty() {
            warn!(
                adapter = %name,
                missing = ?missing,
                "Registered adapter does not provide every capability"
            );
        }

        let registration = RegisteredAdapter {
            adapter,
            condition: Arc::new(condition),
            priority,
        };

        self.snapshot.rcu(|current| {
            let mut next = RegistrySnapshot::clone(current);
            next.buckets
                .entry(priority)
                .or_default()
                .insert(name.clone(), registration.clone());
            next
        });

        info!(adapter = %name, priority, "Registered adapter");
    }

    /// Register `adapter` in the reserved push bucket
    ///
    /// The entry is evaluated before anything registered at the default
    /// priority, which lets applications override built-in detection.
    pub fn push_registration<F>(&self, adapter: Arc<dyn Adapter>, condition: F)
    where
        F: Fn(&ModelClass) -> bool + Send + Sync + 'static,
    {
        self.register_with_priority(adapter, condition, PUSH_PRIORITY);
    }

    /// All registrations merged into evaluation order
    pub fn effective_registrations(&self) -> Registrations {
        let snapshot = self.snapshot.load();
        snapshot
            .effective()
            .map(|registration| (registration.name().to_string(), registration.clone()))
            .collect()
    }

    /// Alias of [`effective_registrations`](Self::effective_registrations)
    /// for introspection
    pub fn adapters(&self) -> Registrations {
        self.effective_registrations()
    }

    /// Adapter for `model`: the first matching registration, else the default
    pub fn resolve(&self, model: &ModelClass) -> Arc<dyn Adapter> {
        let snapshot = self.snapshot.load();
        let adapter = snapshot
            .effective()
            .find(|registration| registration.matches(model))
            .map_or_else(
                || Arc::clone(&self.default),
                |registration| Arc::clone(&registration.adapter),
            );

        debug!(model = %model, adapter = adapter.name(), "Resolved adapter");
        adapter
    }

    /// Per-class handle resolving lazily and memoizing the result
    pub fn from_class(&self, model: ModelClass) -> AdapterResolution<'_> {
        AdapterResolution::new(self, model)
    }

    /// Adapter used when no condition matches
    pub fn default_adapter(&self) -> &Arc<dyn Adapter> {
        &self.default
    }

    /// Number of effective registrations
    pub fn len(&self) -> usize {
        self.snapshot.load().effective().count()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().buckets.values().all(|bucket| bucket.is_empty())
    }

    /// Register every catalog entry that declares a detection condition
    ///
    /// Returns the number of registrations made.
    pub fn install_catalog(&self) -> usize {
        let mut installed = 0;
        for entry in ADAPTERS {
            if let Some(detection) = entry.detection {
                self.register_with_priority((entry.factory)(), detection, entry.priority);
                installed += 1;
            }
        }

        debug!(installed, "Installed catalog adapters");
        installed
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot.load();
        let names: Vec<&str> = snapshot.effective().map(RegisteredAdapter::name).collect();
        f.debug_struct("AdapterRegistry")
            .field("registrations", &names)
            .field("default", &self.default.name())
            .finish()
    }
}
