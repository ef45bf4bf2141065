//! Reference implementations for cross-checking the gfcrs library
//!
//! Everything here works on raw bytes with bit operations only, sharing no
//! code with the polynomial engine it is compared against.

use rand::Rng;

/// x^8 + x^4 + x^3 + x^2 + 1 as a bit mask
pub const GF2_8_POLY: u16 = 0x11d;

/// Bit mask of a little-endian coefficient vector over F_2
pub fn modulus_mask(coeffs: &[u8]) -> u64 {
    coeffs
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &c)| acc | ((c as u64 & 1) << i))
}

/// Shift-and-xor multiplication in GF(2^8)
pub fn gf256_mul(mut a: u8, mut b: u8) -> u8 {
    let reduce = (GF2_8_POLY & 0xff) as u8;
    let mut r = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            r ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= reduce;
        }
        b >>= 1;
    }
    r
}

/// a^n in GF(2^8)
pub fn gf256_pow(a: u8, mut n: u32) -> u8 {
    let mut base = a;
    let mut r = 1u8;
    while n > 0 {
        if n & 1 == 1 {
            r = gf256_mul(r, base);
        }
        base = gf256_mul(base, base);
        n >>= 1;
    }
    r
}

/// Multiplicative inverse in GF(2^8), `None` for zero
pub fn gf256_inv(a: u8) -> Option<u8> {
    (a != 0).then(|| gf256_pow(a, 254))
}

/// The CRS byte recurrence on plain bytes
#[derive(Debug, Clone)]
pub struct ReferenceCrs {
    coefficients: Vec<u8>,
    window: Vec<u8>,
    constant: u8,
}

impl ReferenceCrs {
    pub fn new(coefficients: &[u8], elements: &[u8], constant: u8) -> Self {
        assert_eq!(coefficients.len(), elements.len());
        Self {
            coefficients: coefficients.to_vec(),
            window: elements.to_vec(),
            constant,
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        let x = self
            .coefficients
            .iter()
            .zip(self.window.iter())
            .fold(self.constant, |acc, (&a, &w)| acc ^ gf256_mul(a, w));
        self.window.remove(0);
        self.window.push(x);
        x
    }

    pub fn take(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_byte()).collect()
    }
}

/// Random seed of the given length: (coefficients, elements, constant)
pub fn random_seed<R: Rng>(rng: &mut R, len: usize) -> (Vec<u8>, Vec<u8>, u8) {
    let coefficients = (0..len).map(|_| rng.gen()).collect();
    let elements = (0..len).map(|_| rng.gen()).collect();
    (coefficients, elements, rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_multiplication() {
        assert_eq!(gf256_mul(3, 5), 15);
        assert_eq!(gf256_mul(0x02, 0x80), 0x1d);
        assert_eq!(gf256_inv(0x02), Some(0x8e));
        assert_eq!(gf256_inv(0), None);
    }

    #[test]
    fn test_reference_crs() {
        let mut crs = ReferenceCrs::new(&[1, 1], &[0, 1], 0);
        assert_eq!(crs.take(6), vec![1, 0, 1, 1, 0, 1]);
    }
}
