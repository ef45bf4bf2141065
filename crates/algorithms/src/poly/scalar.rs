//! Residue arithmetic in the prime field F_p
//!
//! Values are raw residues in `[0, p - 1]`; `p` must be prime for [`inv`] to
//! be meaningful. Intermediate products are widened to `u32`.

use crate::error::{Error, Result};

/// Return y such that x + y = 0 (mod p)
#[inline]
pub fn neg(x: u8, p: u8) -> u8 {
    ((p as u16 - (x % p) as u16) % p as u16) as u8
}

/// Return a + b (mod p)
#[inline]
pub fn sum(a: u8, b: u8, p: u8) -> u8 {
    ((a as u16 + b as u16) % p as u16) as u8
}

/// Return a - b (mod p)
#[inline]
pub fn diff(a: u8, b: u8, p: u8) -> u8 {
    sum(a, neg(b, p), p)
}

/// Return a * b (mod p)
#[inline]
pub fn product(a: u8, b: u8, p: u8) -> u8 {
    ((a as u32 * b as u32) % p as u32) as u8
}

/// Return x^n (mod p) by square-and-multiply
pub fn pow(x: u8, n: u64, p: u8) -> u8 {
    if p == 1 {
        return 0;
    }

    let m = p as u32;
    let mut result = 1u32;
    let mut base = x as u32 % m;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = (result * base) % m;
        }
        exp >>= 1;
        base = (base * base) % m;
    }

    result as u8
}

/// Return y such that x * y = 1 (mod p)
///
/// Computed as x^(p-2) by Fermat's little theorem, so `p` must be prime.
pub fn inv(x: u8, p: u8) -> Result<u8> {
    if x % p == 0 {
        return Err(Error::DivisionByZero {
            operation: "scalar inverse",
        });
    }
    Ok(pow(x, (p - 2) as u64, p))
}
