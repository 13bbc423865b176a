//! Adapter Implementations
//!
//! | Adapter | Records | Callbacks | Importing |
//! |---------|---------|-----------|-----------|
//! | [`DefaultAdapter`] | `source.find`, reordered | none | not implemented |
//! | [`NullAdapter`] | empty | none | empty, pass-through transform |

pub mod default;
pub mod null;

pub use default::DefaultAdapter;
pub use null::NullAdapter;
