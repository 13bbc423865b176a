//! Domain constants
//!
//! Registration priorities and the well-known names adapters are looked up by.

// ============================================================================
// REGISTRATION PRIORITIES
// ============================================================================

/// Bucket used by plain registrations
pub const DEFAULT_PRIORITY: i32 = 0;

/// Reserved bucket for push registrations, evaluated before everything else
pub const PUSH_PRIORITY: i32 = 9999;

// ============================================================================
// ADAPTER NAMES
// ============================================================================

/// Name of the fallback adapter used when no condition matches
pub const DEFAULT_ADAPTER_NAME: &str = "default";

/// Name of the no-op adapter used in tests
pub const NULL_ADAPTER_NAME: &str = "null";

// ============================================================================
// CAPABILITY NAMES
// ============================================================================

/// Well-known name of the record fetching capability
pub const RECORDS_CAPABILITY: &str = "Records";

/// Well-known name of the lifecycle callback capability
pub const CALLBACKS_CAPABILITY: &str = "Callbacks";

/// Well-known name of the bulk import capability
pub const IMPORTING_CAPABILITY: &str = "Importing";

// ============================================================================
// MODEL DEFAULTS
// ============================================================================

/// Primary key assumed when a model class does not declare one
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Records per batch when importing
pub const DEFAULT_IMPORT_BATCH_SIZE: usize = 1000;
