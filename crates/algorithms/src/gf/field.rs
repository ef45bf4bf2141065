//! Field descriptors and the built-in binary fields

use core::ptr;

use once_cell::sync::Lazy;

use gfcrs_params::field::{
    GF2_16_MODULUS, GF2_32_MODULUS, GF2_8_MODULUS, GF2_CHARACTERISTIC,
};

use super::element::FieldElement;
use crate::error::{validate, Error, Result};
use crate::poly::params::is_prime;
use crate::poly::Polynomial;

/// GF(2^8) reduced by x^8 + x^4 + x^3 + x^2 + 1
pub static GF2_8: Lazy<GaloisField> = Lazy::new(|| {
    GaloisField::new(GF2_CHARACTERISTIC, &GF2_8_MODULUS)
        .expect("GF(2^8) modulus is a valid polynomial over F_2")
});

/// GF(2^16) reduced by x^16 + x^9 + x^8 + x^7 + x^6 + x^4 + x^3 + x^2 + 1
pub static GF2_16: Lazy<GaloisField> = Lazy::new(|| {
    GaloisField::new(GF2_CHARACTERISTIC, &GF2_16_MODULUS)
        .expect("GF(2^16) modulus is a valid polynomial over F_2")
});

/// GF(2^32) reduced by x^32 + x^22 + x^2 + x + 1
pub static GF2_32: Lazy<GaloisField> = Lazy::new(|| {
    GaloisField::new(GF2_CHARACTERISTIC, &GF2_32_MODULUS)
        .expect("GF(2^32) modulus is a valid polynomial over F_2")
});

/// The Galois field GF(p^d)
///
/// Immutable once built. Irreducibility of the modulus is not checked here;
/// a reducible modulus yields a ring in which some inverses do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GaloisField {
    p: u8,
    modulus: Polynomial,
    order: u64,
}

impl GaloisField {
    /// Build GF(p^d) from a prime `p` and the little-endian coefficients of a
    /// modulus of degree d >= 1
    ///
    /// The order p^d must fit in a `u64`, since inversion raises elements to
    /// the power p^d - 2. Larger fields are rejected with a parameter error.
    pub fn new(p: u8, modulus: &[u8]) -> Result<Self> {
        validate::parameter(is_prime(p), "p", "characteristic must be prime")?;
        let modulus = Polynomial::new(modulus, p)?;
        validate::parameter(modulus.degree() >= 1, "modulus", "degree must be at least 1")?;

        let order = u32::try_from(modulus.degree())
            .ok()
            .and_then(|d| u64::from(p).checked_pow(d))
            .ok_or_else(|| Error::param("modulus", "field order p^d must fit in 64 bits"))?;

        Ok(Self { p, modulus, order })
    }

    /// Characteristic p
    pub fn characteristic(&self) -> u8 {
        self.p
    }

    /// The irreducible polynomial elements are reduced by
    pub fn modulus(&self) -> &Polynomial {
        &self.modulus
    }

    /// Extension degree d
    pub fn degree(&self) -> usize {
        self.modulus.degree()
    }

    /// Number of elements p^d
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The additive identity
    pub fn zero(&self) -> Result<FieldElement<'_>> {
        let poly = Polynomial::zero(self.degree(), self.p)?;
        Ok(FieldElement::from_reduced(poly, self))
    }

    /// The multiplicative identity
    pub fn identity(&self) -> Result<FieldElement<'_>> {
        let poly = Polynomial::identity(self.degree(), self.p)?;
        Ok(FieldElement::from_reduced(poly, self))
    }

    /// Reduce an arbitrary coefficient slice into an element of this field
    pub fn element(&self, coeffs: &[u8]) -> Result<FieldElement<'_>> {
        let poly = Polynomial::new(coeffs, self.p)?.rem(&self.modulus)?;
        Ok(FieldElement::from_reduced(poly, self))
    }
}

/// Structural field equality, short-circuiting on identity
pub fn equal_fields(f1: &GaloisField, f2: &GaloisField) -> bool {
    ptr::eq(f1, f2) || f1 == f2
}
