//! # Search Index Adapters
//!
//! Pluggable selection of the integration strategy used to index a model
//! class into a search engine. Each data-mapping library gets an adapter
//! bundling three capabilities: record fetching, lifecycle callbacks and
//! bulk importing. The registry picks the adapter for a model class by
//! evaluating detection conditions in priority order.
//!
//! ## Example
//!
//! ```ignore
//! use sia::infrastructure::{AppConfig, bootstrap};
//! use sia::{ModelClass, conditions};
//!
//! let registry = bootstrap(&AppConfig::default())?;
//! registry.push_registration(Arc::new(MyAdapter), conditions::descends_from("MyOrm::Model"));
//!
//! let resolution = registry.from_class(ModelClass::new("Article").with_ancestor("MyOrm::Model"));
//! let records = resolution.records_provider()?.records(&source, &ids).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capability ports, value objects and the error type
//! - `application` - Adapter registry, resolution handle and catalog
//! - `providers` - Built-in default and null adapters
//! - `infrastructure` - Configuration, logging and registry bootstrap

// Force linkme registration of the built-in adapters
extern crate sia_providers;

/// Domain layer - capability ports and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sia_domain::*;
}

/// Application layer - adapter registry and resolution
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use sia_application::*;
}

/// Built-in adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use sia_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use sia_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::*;

pub use application::{AdapterRegistry, AdapterResolution, conditions};
pub use providers::{DefaultAdapter, InMemoryRecordSource, NullAdapter};
