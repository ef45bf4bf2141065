//! polynomial.rs - Polynomials over F_p with Euclidean reduction

use core::fmt;

use zeroize::Zeroize;

use super::scalar;
use crate::error::{validate, Error, Result};

/// A polynomial over the prime field F_p
///
/// Coefficients are little-endian (`coeffs[i]` is the coefficient of x^i) and
/// always normalized: the buffer holds exactly `degree + 1` entries, so the
/// leading coefficient is non-zero unless the polynomial is the canonical
/// zero `[0]`. The degree is a `usize`, wide enough for any product of two
/// polynomials that fit in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Coefficients of the polynomial in little-endian order
    coeffs: Vec<u8>,
    /// Characteristic of the coefficient field
    p: u8,
}

/// Reserve an empty coefficient buffer, reporting allocation failure
fn alloc_coeffs(capacity: usize, context: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| Error::Allocation { context })?;
    Ok(buf)
}

impl Polynomial {
    /// Creates a polynomial from a slice of coefficients
    pub fn new(coeffs: &[u8], p: u8) -> Result<Self> {
        validate::parameter(!coeffs.is_empty(), "coeffs", "at least one coefficient is required")?;
        validate::parameter(p >= 2, "p", "characteristic must be at least 2")?;
        validate::parameter(
            coeffs.iter().all(|&c| c < p),
            "coeffs",
            "coefficient is not a residue modulo the characteristic",
        )?;

        let mut buf = alloc_coeffs(coeffs.len(), "polynomial coefficients")?;
        buf.extend_from_slice(coeffs);

        let mut poly = Self { coeffs: buf, p };
        poly.normalize();
        Ok(poly)
    }

    /// Creates the zero polynomial with room for `capacity` coefficients
    pub fn zero(capacity: usize, p: u8) -> Result<Self> {
        validate::parameter(p >= 2, "p", "characteristic must be at least 2")?;

        let mut buf = alloc_coeffs(capacity.max(1), "polynomial coefficients")?;
        buf.push(0);
        Ok(Self { coeffs: buf, p })
    }

    /// Creates the constant polynomial 1 with room for `capacity` coefficients
    pub fn identity(capacity: usize, p: u8) -> Result<Self> {
        let mut id = Self::zero(capacity, p)?;
        id.coeffs[0] = 1;
        Ok(id)
    }

    /// Returns the degree of the polynomial (0 for constants, including zero)
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the characteristic p of the coefficient field
    pub fn characteristic(&self) -> u8 {
        self.p
    }

    /// Returns a slice view of the coefficients, lowest degree first
    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    /// Coefficient of x^i, zero past the degree
    pub fn coeff(&self, i: usize) -> u8 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Coefficient of the highest-degree term
    pub fn leading_coefficient(&self) -> u8 {
        self.coeffs[self.degree()]
    }

    /// Drop leading zero coefficients, never going below degree 0
    pub fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs[self.coeffs.len() - 1] == 0 {
            self.coeffs.pop();
        }
    }

    /// True iff this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Copy with allocation failure reported instead of aborting
    pub fn try_clone(&self) -> Result<Self> {
        let mut buf = alloc_coeffs(self.coeffs.len(), "polynomial copy")?;
        buf.extend_from_slice(&self.coeffs);
        Ok(Self {
            coeffs: buf,
            p: self.p,
        })
    }

    /// Additive inverse: g such that f + g = 0
    pub fn neg(&self) -> Result<Self> {
        let mut buf = alloc_coeffs(self.coeffs.len(), "polynomial negation")?;
        buf.extend(self.coeffs.iter().map(|&c| scalar::neg(c, self.p)));

        let mut res = Self {
            coeffs: buf,
            p: self.p,
        };
        res.normalize();
        Ok(res)
    }

    /// Polynomial addition modulo p
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, "polynomial add", scalar::sum)
    }

    /// Polynomial subtraction modulo p
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, "polynomial subtract", scalar::diff)
    }

    /// Coefficient-wise combination over max(deg) + 1 terms
    fn combine(
        &self,
        other: &Self,
        operation: &'static str,
        op: fn(u8, u8, u8) -> u8,
    ) -> Result<Self> {
        validate::same_field(self.p == other.p, operation)?;

        let len = self.coeffs.len().max(other.coeffs.len());
        let mut buf = alloc_coeffs(len, operation)?;
        for i in 0..len {
            buf.push(op(self.coeff(i), other.coeff(i), self.p));
        }

        let mut res = Self {
            coeffs: buf,
            p: self.p,
        };
        res.normalize();
        Ok(res)
    }

    /// In-place addition: self <- self + other
    ///
    /// Reuses this polynomial's buffer, growing it only when `other` has the
    /// higher degree.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        validate::same_field(self.p == other.p, "polynomial accumulate")?;

        if other.coeffs.len() > self.coeffs.len() {
            let extra = other.coeffs.len() - self.coeffs.len();
            self.coeffs
                .try_reserve(extra)
                .map_err(|_| Error::Allocation {
                    context: "polynomial accumulate",
                })?;
            self.coeffs.resize(other.coeffs.len(), 0);
        }

        let p = self.p;
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = scalar::sum(*a, b, p);
        }
        self.normalize();
        Ok(())
    }

    /// Schoolbook multiplication (full convolution) modulo p
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::same_field(self.p == other.p, "polynomial multiply")?;

        let overflow = Error::Processing {
            operation: "polynomial multiply",
            details: "product degree overflows usize",
        };
        let degree = self.degree().checked_add(other.degree()).ok_or(overflow.clone())?;
        let len = degree.checked_add(1).ok_or(overflow)?;

        let mut buf = alloc_coeffs(len, "polynomial product")?;
        buf.resize(len, 0);

        let p = self.p as u32;
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                let acc = buf[i + j] as u32 + a as u32 * b as u32;
                buf[i + j] = (acc % p) as u8;
            }
        }

        let mut res = Self {
            coeffs: buf,
            p: self.p,
        };
        res.normalize();
        Ok(res)
    }

    /// Remainder of Euclidean division by `divisor`
    ///
    /// Long division from the dividend's leading term downward, eliminating one
    /// degree per step with the inverse of the divisor's leading coefficient.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        validate::same_field(self.p == divisor.p, "polynomial remainder")?;
        if divisor.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "polynomial remainder",
            });
        }

        let mut res = self.try_clone()?;
        let n = divisor.degree();
        if res.degree() < n {
            return Ok(res);
        }

        let p = self.p;
        let m = res.degree();
        let lead_inv = scalar::inv(divisor.leading_coefficient(), p)?;

        for top in (n..=m).rev() {
            let q = scalar::product(res.coeffs[top], lead_inv, p);
            if q == 0 {
                continue;
            }
            // divisor's x^k term lines up with x^(top - n + k)
            for (k, &d) in divisor.coeffs.iter().enumerate() {
                let idx = top - n + k;
                res.coeffs[idx] = scalar::diff(res.coeffs[idx], scalar::product(q, d, p), p);
            }
        }

        res.normalize();
        Ok(res)
    }

    /// (self * other) mod `modulus`
    pub fn mul_mod(&self, other: &Self, modulus: &Self) -> Result<Self> {
        self.mul(other)?.rem(modulus)
    }

    /// self^n mod `modulus` by square-and-multiply
    ///
    /// Every intermediate product is reduced, so no operand ever exceeds
    /// degree 2 * deg(modulus).
    pub fn pow_mod(&self, n: u64, modulus: &Self) -> Result<Self> {
        validate::same_field(self.p == modulus.p, "polynomial power")?;

        let capacity = modulus.degree().saturating_mul(2).max(1);
        let mut result = Self::identity(capacity, self.p)?.rem(modulus)?;
        let mut base = self.rem(modulus)?;
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_mod(&base, modulus)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_mod(&base, modulus)?;
            }
        }

        Ok(result)
    }
}

/// Wipes the coefficients in place and leaves the zero polynomial `[0]`
///
/// The characteristic is kept, so a wiped polynomial stays usable.
impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.coeffs.as_mut_slice().zeroize();
        self.coeffs.truncate(1);
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match (i, c) {
                (0, _) => write!(f, "{}", c)?,
                (1, 1) => write!(f, "x")?,
                (1, _) => write!(f, "{}x", c)?,
                (_, 1) => write!(f, "x^{}", i)?,
                _ => write!(f, "{}x^{}", c, i)?,
            }
        }
        Ok(())
    }
}
