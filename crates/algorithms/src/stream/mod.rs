//! Sequence generators
//!
//! This module provides deterministic generators driven by Galois field
//! arithmetic. They are reproducible from their seed and are not suitable
//! for cryptographic use.
//!
//! # Available Generators
//!
//! - CRS: a linear recurrence over GF(2^w) with an additive constant

/// Constant-recurrence-sequence generator
pub mod crs;

// Re-export commonly used types
pub use crs::{Crs, CrsConfig, CrsState};
