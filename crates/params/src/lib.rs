//! Constant values for gfcrs field arithmetic and sequence generation
//!
//! This crate provides the irreducible polynomials of the built-in binary
//! fields and the limits of the CRS generator configuration.

#![no_std]

pub mod crs;
pub mod field;
