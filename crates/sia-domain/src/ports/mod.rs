//! Domain Port Interfaces
//!
//! Contracts between the host indexing library and the adapters that bridge
//! it to a particular mapping library.

/// Adapter and capability ports
pub mod providers;

pub use providers::{
    Adapter, CallbackProvider, Capability, ImportProvider, RecordSource, RecordsProvider,
};
