//! Infrastructure utilities below the application layer.
//!
//! Currently hosts the URL query codec, the only piece of the core that
//! talks a wire-ish format rather than in-memory state.

pub mod query;

pub use query::{parse, serialize, ParsedQuery};
