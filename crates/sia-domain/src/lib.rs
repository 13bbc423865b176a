//! # Domain Layer
//!
//! Core types shared by every layer of the search index adapters workspace.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Priorities and well-known names |
//! | [`value_objects`] | Model classes, records, lifecycle hooks, import options |
//! | [`ports`] | Capability contracts adapters implement |
//!
//! This crate has no knowledge of which adapters exist or how they are
//! selected. Selection lives in `sia-application`, concrete adapters in
//! `sia-providers`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::{
    Adapter, CallbackProvider, Capability, ImportProvider, RecordSource, RecordsProvider,
};
pub use value_objects::{
    BulkOperation, ImportOptions, IndexAction, LifecycleEvent, LifecycleHook, ModelClass, Record,
};
