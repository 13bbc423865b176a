//! Application Layer - Search Index Adapters
//!
//! Decides which adapter serves a model class.
//!
//! ## Components
//!
//! - [`registry`]: ordered, overridable (condition, adapter) registrations
//!   grouped in priority buckets, with fallback to a default adapter
//! - [`resolution`]: per-class handle memoizing the resolved adapter and
//!   exposing its three capabilities
//! - [`catalog`]: compile-time adapter catalog populated by other crates
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `sia-domain`: capability ports and value objects
//! - Pure Rust libraries for snapshots, ordered maps and registration

pub mod catalog;
pub mod registry;
pub mod resolution;

pub use catalog::{ADAPTERS, AdapterEntry, list_adapters, resolve_adapter};
pub use registry::{AdapterRegistry, Condition, RegisteredAdapter, Registrations, conditions};
pub use resolution::AdapterResolution;
