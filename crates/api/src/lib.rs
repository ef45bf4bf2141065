//! Public API traits and types for the gfcrs library
//!
//! This crate provides the public API surface for the gfcrs workspace: the
//! error type shared by every layer and the trait implemented by the
//! byte generators.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::ByteStream;
