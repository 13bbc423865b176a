//! Domain Value Objects
//!
//! Immutable value objects exchanged between the registry, adapters and the
//! host indexing library.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ModelClass`] | Descriptor of a host model class used for adapter detection |
//! | [`Record`] | A persisted record loaded through an adapter |
//! | [`LifecycleHook`] | Lifecycle event paired with the index action it triggers |
//! | [`ImportOptions`] | Batch options for bulk importing |
//! | [`BulkOperation`] | Single bulk-API action produced while importing |

/// Bulk import value objects
pub mod import;
/// Lifecycle callback value objects
pub mod lifecycle;
/// Model class descriptor
pub mod model;
/// Persisted record value object
pub mod record;

// Re-export commonly used value objects
pub use import::{BulkOperation, ImportOptions};
pub use lifecycle::{IndexAction, LifecycleEvent, LifecycleHook};
pub use model::ModelClass;
pub use record::Record;
