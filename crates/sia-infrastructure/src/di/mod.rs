//! Registry Composition
//!
//! Builds the adapter registry from configuration using the linkme catalog.

pub mod bootstrap;

pub use bootstrap::bootstrap;
