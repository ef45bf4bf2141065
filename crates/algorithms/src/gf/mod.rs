//! Galois field arithmetic
//!
//! A [`GaloisField`] GF(p^d) is a prime characteristic together with an
//! irreducible polynomial of degree d over F_p. Its elements are polynomial
//! residues of degree < d, borrowed against the field they belong to, so two
//! elements of different fields can never be combined silently.
//!
//! Three binary fields are built once per process and shared by reference:
//! [`GF2_8`], [`GF2_16`] and [`GF2_32`]. The [`codec`] module maps fixed-width
//! unsigned integers onto them bit by bit.

pub mod codec;
pub mod element;
pub mod field;

pub use codec::{from_u16, from_u32, from_u8, to_u16, to_u32, to_u8, BinaryCodec};
pub use element::FieldElement;
pub use field::{equal_fields, GaloisField, GF2_16, GF2_32, GF2_8};
