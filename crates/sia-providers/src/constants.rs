//! Provider Constants
//!
//! Constants specific to the built-in adapters. Adapter names live in
//! `sia-domain` because configuration refers to them too.

/// Catalog description of the fallback adapter
pub const DEFAULT_ADAPTER_DESCRIPTION: &str =
    "Fallback adapter: loads records by id, no callbacks, no importing";

/// Catalog description of the no-op adapter
pub const NULL_ADAPTER_DESCRIPTION: &str = "No-op adapter for testing";

/// Name reported by an in-memory record source created without one
pub const IN_MEMORY_SOURCE_NAME: &str = "memory";

/// Operation name reported when batch reading is unsupported
pub const FIND_IN_BATCHES_OPERATION: &str = "find_in_batches";

/// Operation name reported when record transformation is unsupported
pub const TRANSFORM_OPERATION: &str = "transform";
