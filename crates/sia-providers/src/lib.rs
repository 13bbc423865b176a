//! # Search Index Adapters - Built-in Adapters
//!
//! Concrete adapters and record sources. Each adapter implements the
//! [`Adapter`] port from `sia-domain` and publishes itself in the
//! `sia-application` catalog, so linking this crate is enough to make it
//! selectable by name.
//!
//! | Adapter | Catalog name | Use |
//! |---------|--------------|-----|
//! | [`DefaultAdapter`] | `default` | Fallback for classes no condition matches |
//! | [`NullAdapter`] | `null` | No-op adapter for tests |
//!
//! ## Usage
//!
//! ```ignore
//! use sia_application::AdapterRegistry;
//! use sia_providers::DefaultAdapter;
//!
//! let registry = AdapterRegistry::new(Arc::new(DefaultAdapter::new()));
//! ```

pub use sia_domain::error::{Error, Result};
pub use sia_domain::ports::providers::{Adapter, RecordSource};

/// Provider-specific constants
pub mod constants;

/// Adapter implementations
pub mod adapters;

/// Record source implementations
pub mod record_source;

pub use adapters::{DefaultAdapter, NullAdapter};
pub use record_source::InMemoryRecordSource;
