//! # gfcrs
//!
//! Galois field arithmetic and a deterministic CRS byte generator.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gfcrs = "0.3"
//! ```
//!
//! ```
//! use gfcrs::prelude::*;
//!
//! let config = CrsConfig::new(vec![1u8, 1], vec![0, 1], 0);
//! let mut crs = Crs::new(&config).unwrap();
//! assert_eq!(crs.next_byte(), 1);
//! assert_eq!(crs.next_byte(), 0);
//! ```
//!
//! ## Features
//!
//! - `rnddev`: the user-space rnddev device and its parameters
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gfcrs-api`]: Error type and the `ByteStream` trait
//! - [`gfcrs-params`]: Field moduli and generator limits
//! - [`gfcrs-algorithms`]: Polynomials, Galois fields and the CRS generator
//! - [`gfcrs-rnddev`]: Device emulation (feature `rnddev`)

// Core re-exports (always available)
pub use gfcrs_algorithms as algorithms;
pub use gfcrs_api as api;
pub use gfcrs_params as params;

// Feature-gated re-exports
#[cfg(feature = "rnddev")]
pub use gfcrs_rnddev as rnddev;

/// Common imports for gfcrs users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{ByteStream, Error, Result};

    // Field arithmetic
    pub use crate::algorithms::gf::{
        from_u16, from_u32, from_u8, to_u16, to_u32, to_u8, BinaryCodec, FieldElement,
        GaloisField, GF2_16, GF2_32, GF2_8,
    };
    pub use crate::algorithms::poly::Polynomial;

    // Generator
    pub use crate::algorithms::stream::{Crs, CrsConfig, CrsState};

    #[cfg(feature = "rnddev")]
    pub use crate::rnddev::{DeviceConfig, RndDev};
}
