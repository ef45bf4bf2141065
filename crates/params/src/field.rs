//! Irreducible polynomials of the preconfigured binary Galois fields
//!
//! Coefficients are little-endian: index i holds the coefficient of x^i.

/// Characteristic shared by all built-in fields
pub const GF2_CHARACTERISTIC: u8 = 2;

/// Extension degree of GF(2^8)
pub const GF2_8_DEGREE: usize = 8;

/// Extension degree of GF(2^16)
pub const GF2_16_DEGREE: usize = 16;

/// Extension degree of GF(2^32)
pub const GF2_32_DEGREE: usize = 32;

/// x^8 + x^4 + x^3 + x^2 + 1
pub const GF2_8_MODULUS: [u8; GF2_8_DEGREE + 1] = [1, 0, 1, 1, 1, 0, 0, 0, 1];

/// x^16 + x^9 + x^8 + x^7 + x^6 + x^4 + x^3 + x^2 + 1
pub const GF2_16_MODULUS: [u8; GF2_16_DEGREE + 1] = [
    1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1,
];

/// x^32 + x^22 + x^2 + x + 1
pub const GF2_32_MODULUS: [u8; GF2_32_DEGREE + 1] = [
    1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1,
];
