//! Property-based tests for Galois field arithmetic and the integer codec

use gfcrs_algorithms::gf::{from_u16, from_u32, from_u8, to_u16, to_u32, to_u8, GF2_8};
use gfcrs_algorithms::poly::Polynomial;
use gfcrs_algorithms::Error;
use proptest::prelude::*;

proptest! {
    #[test]
    fn gf256_add_commutes(a in any::<u8>(), b in any::<u8>()) {
        let (x, y) = (from_u8(a).unwrap(), from_u8(b).unwrap());
        prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
    }

    #[test]
    fn gf256_add_neg_is_zero(a in any::<u8>()) {
        let x = from_u8(a).unwrap();
        prop_assert!(x.add(&x.neg().unwrap()).unwrap().is_zero());
    }

    #[test]
    fn gf256_mul_inv_is_identity(a in 1..=255u8) {
        let x = from_u8(a).unwrap();
        let one = GF2_8.identity().unwrap();
        prop_assert_eq!(x.mul(&x.inv().unwrap()).unwrap(), one);
    }

    #[test]
    fn gf256_distributive(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let (x, y, z) = (from_u8(a).unwrap(), from_u8(b).unwrap(), from_u8(c).unwrap());
        let lhs = x.mul(&y.add(&z).unwrap()).unwrap();
        let rhs = x.mul(&y).unwrap().add(&x.mul(&z).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn gf256_div_undoes_mul(a in any::<u8>(), b in 1..=255u8) {
        let (x, y) = (from_u8(a).unwrap(), from_u8(b).unwrap());
        prop_assert_eq!(x.mul(&y).unwrap().div(&y).unwrap(), x);
    }

    #[test]
    fn u16_codec_round_trip(a in any::<u16>()) {
        prop_assert_eq!(to_u16(&from_u16(a).unwrap()).unwrap(), a);
    }

    #[test]
    fn u32_codec_round_trip(a in any::<u32>()) {
        prop_assert_eq!(to_u32(&from_u32(a).unwrap()).unwrap(), a);
    }

    #[test]
    fn u32_mul_commutes(a in any::<u32>(), b in any::<u32>()) {
        let (x, y) = (from_u32(a).unwrap(), from_u32(b).unwrap());
        prop_assert_eq!(x.mul(&y).unwrap(), y.mul(&x).unwrap());
    }

    #[test]
    fn mixed_fields_are_rejected(a in any::<u8>(), b in any::<u16>()) {
        let (x, y) = (from_u8(a).unwrap(), from_u16(b).unwrap());
        let results = [x.add(&y), x.sub(&y), x.mul(&y), x.div(&y)];
        let all_mismatched = results
            .iter()
            .all(|r| matches!(r, Err(Error::FieldMismatch { .. })));
        prop_assert!(all_mismatched, "mixed-field operation was not rejected");
        let mut acc = x.try_clone().unwrap();
        let accumulate_mismatched =
            matches!(acc.accumulate(&y), Err(Error::FieldMismatch { .. }));
        prop_assert!(accumulate_mismatched);
        prop_assert_eq!(acc, x);
    }

    #[test]
    fn normalize_is_idempotent(coeffs in prop::collection::vec(0..7u8, 1..40)) {
        let mut f = Polynomial::new(&coeffs, 7).unwrap();
        let once = f.clone();
        f.normalize();
        prop_assert_eq!(&f, &once);
        prop_assert!(f.is_zero() || f.leading_coefficient() != 0);
    }

    #[test]
    fn remainder_has_lower_degree(
        a in prop::collection::vec(0..5u8, 1..32),
        b in prop::collection::vec(0..5u8, 2..8),
    ) {
        let f = Polynomial::new(&a, 5).unwrap();
        let g = Polynomial::new(&b, 5).unwrap();
        prop_assume!(!g.is_zero() && g.degree() > 0);
        let r = f.rem(&g).unwrap();
        prop_assert!(r.degree() < g.degree() || r.is_zero());
    }
}

#[test]
fn byte_codec_is_a_bijection() {
    for x in 0..=255u8 {
        let e = from_u8(x).unwrap();
        assert_eq!(to_u8(&e).unwrap(), x);
        assert_eq!(from_u8(to_u8(&e).unwrap()).unwrap(), e);
    }
}
