//! Field elements and their arithmetic

use core::fmt;

use zeroize::Zeroize;

use super::field::{equal_fields, GaloisField};
use crate::error::{validate, Error, Result};
use crate::poly::Polynomial;

/// An element of a [`GaloisField`]
///
/// Holds the canonical residue (degree below the field degree) and a shared
/// reference to the field. Every operation returns a new element and leaves
/// its operands untouched, except [`FieldElement::accumulate`].
#[derive(Debug, Clone)]
pub struct FieldElement<'f> {
    poly: Polynomial,
    field: &'f GaloisField,
}

impl<'f> FieldElement<'f> {
    /// Wrap a residue that is already reduced modulo the field polynomial
    pub(crate) fn from_reduced(poly: Polynomial, field: &'f GaloisField) -> Self {
        debug_assert!(poly.degree() < field.degree() || poly.is_zero());
        Self { poly, field }
    }

    /// The field this element belongs to
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// The reduced residue
    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// True for the additive identity
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// Copy with allocation failure reported instead of aborting
    pub fn try_clone(&self) -> Result<Self> {
        Ok(self.wrap(self.poly.try_clone()?))
    }

    #[inline]
    fn check(&self, other: &Self, operation: &'static str) -> Result<()> {
        validate::same_field(equal_fields(self.field, other.field), operation)
    }

    fn wrap(&self, poly: Polynomial) -> Self {
        Self::from_reduced(poly, self.field)
    }

    /// Additive inverse
    pub fn neg(&self) -> Result<Self> {
        Ok(self.wrap(self.poly.neg()?))
    }

    /// Field addition
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check(rhs, "field add")?;
        Ok(self.wrap(self.poly.add(&rhs.poly)?))
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check(rhs, "field subtract")?;
        Ok(self.wrap(self.poly.sub(&rhs.poly)?))
    }

    /// Field multiplication, reduced by the field polynomial
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check(rhs, "field multiply")?;
        Ok(self.wrap(self.poly.mul_mod(&rhs.poly, self.field.modulus())?))
    }

    /// Multiplicative inverse, x^(p^d - 2)
    pub fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "field inverse",
            });
        }

        let exponent = self.field.order().checked_sub(2).ok_or(Error::Processing {
            operation: "field inverse",
            details: "field order below 2",
        })?;
        self.pow(exponent)
    }

    /// Field division, self * rhs^-1
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check(rhs, "field divide")?;
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "field divide",
            });
        }
        self.mul(&rhs.inv()?)
    }

    /// Raise to the n-th power
    pub fn pow(&self, n: u64) -> Result<Self> {
        Ok(self.wrap(self.poly.pow_mod(n, self.field.modulus())?))
    }

    /// In-place addition: self <- self + rhs
    pub fn accumulate(&mut self, rhs: &Self) -> Result<()> {
        self.check(rhs, "field accumulate")?;
        self.poly.add_assign(&rhs.poly)
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        equal_fields(self.field, other.field) && self.poly == other.poly
    }
}

impl Eq for FieldElement<'_> {}

/// Wipes the residue, leaving the zero of the same field
impl Zeroize for FieldElement<'_> {
    fn zeroize(&mut self) {
        self.poly.zeroize();
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly)
    }
}
