//! Record Source Implementations
//!
//! Record sources stand in for the data-mapping library a model is built
//! on. Hosts normally implement [`RecordSource`](sia_domain::RecordSource)
//! over their own storage; the in-memory source here serves tests and
//! examples.

pub mod in_memory;

pub use in_memory::InMemoryRecordSource;
