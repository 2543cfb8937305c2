//! Drakkar SDK
//!
//! The content model shared by the projection kernel, content stores, and
//! test fixtures. Every type here is plain data and (de)serializes with serde
//! so stores can be loaded from YAML or JSON documents.

pub mod types;

// Re-export serde_json so stores can build raw values without a direct dependency.
#[doc(hidden)]
pub use serde_json;

pub mod prelude {
    pub use crate::types::*;
}
