//! Adapter Capability Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Adapter`] | Bundle of the three capabilities for one mapping library |
//! | [`RecordsProvider`] | Loads records for search hits |
//! | [`CallbackProvider`] | Declares lifecycle hooks that keep the index in sync |
//! | [`ImportProvider`] | Reads records in batches and turns them into bulk operations |
//! | [`RecordSource`] | The mapping library's view of a model's stored records |

/// Adapter port and capability identifiers
pub mod adapter;
/// Lifecycle callback capability
pub mod callbacks;
/// Bulk import capability
pub mod importing;
/// Record storage collaborator
pub mod record_source;
/// Record fetching capability
pub mod records;

pub use adapter::{Adapter, Capability};
pub use callbacks::CallbackProvider;
pub use importing::ImportProvider;
pub use record_source::RecordSource;
pub use records::RecordsProvider;
