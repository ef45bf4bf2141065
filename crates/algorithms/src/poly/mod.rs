//! Polynomial Engine over prime fields
//!
//! This module provides coefficient-vector polynomials over F_p together with
//! the scalar residue arithmetic they are built on. Euclidean reduction and
//! modular exponentiation here are the foundation of the Galois field layer.

pub mod params;
pub mod polynomial;
pub mod scalar;

pub use polynomial::Polynomial;
