//! Galois field arithmetic and CRS sequence generation
//!
//! This crate provides polynomials over prime fields, Galois fields built from
//! an irreducible modulus, a bit-level codec between unsigned words and the
//! binary fields GF(2^8), GF(2^16) and GF(2^32), and a deterministic
//! linear-recurrence byte generator over those fields.
//!
//! # Layers
//!
//! - [`poly`]: residue arithmetic in F_p and the polynomial engine
//! - [`gf`]: fields, elements and the integer codec
//! - [`stream`]: the CRS generator
//!
//! The generator is reproducible from its seed and is not a cryptographic
//! random number generator.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial engine
pub mod poly;
pub use poly::Polynomial;

// Galois fields
pub mod gf;
pub use gf::{BinaryCodec, FieldElement, GaloisField, GF2_16, GF2_32, GF2_8};

// Sequence generators
pub mod stream;
pub use stream::{Crs, CrsConfig, CrsState};
