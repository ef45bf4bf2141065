//! Cross-implementation tests
//!
//! The polynomial engine is checked against the bitwise reference in
//! `gfcrs_tests`.

use gfcrs_algorithms::gf::{from_u8, to_u8, GF2_16, GF2_32, GF2_8};
use gfcrs_algorithms::stream::{Crs, CrsConfig};
use gfcrs_params::crs::CRS_MAX_LEN;
use gfcrs_params::field::{GF2_16_MODULUS, GF2_32_MODULUS, GF2_8_MODULUS};
use gfcrs_tests::{gf256_inv, gf256_mul, modulus_mask, random_seed, ReferenceCrs, GF2_8_POLY};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_moduli_match_reference_masks() {
    assert_eq!(modulus_mask(&GF2_8_MODULUS), GF2_8_POLY as u64);
    assert_eq!(modulus_mask(&GF2_16_MODULUS), 0x1_03dd);
    assert_eq!(modulus_mask(&GF2_32_MODULUS), 0x1_0040_0007);

    assert_eq!(modulus_mask(GF2_8.modulus().coeffs()), GF2_8_POLY as u64);
    assert_eq!(modulus_mask(GF2_16.modulus().coeffs()), 0x1_03dd);
    assert_eq!(modulus_mask(GF2_32.modulus().coeffs()), 0x1_0040_0007);
}

#[test]
fn test_gf256_multiplication_all_pairs() {
    let elements: Vec<_> = (0..=255u8).map(|x| from_u8(x).unwrap()).collect();

    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let product = elements[a as usize].mul(&elements[b as usize]).unwrap();
            assert_eq!(
                to_u8(&product).unwrap(),
                gf256_mul(a, b),
                "{:#04x} * {:#04x}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_gf256_inverse_all_elements() {
    for a in 1..=255u8 {
        let inv = from_u8(a).unwrap().inv().unwrap();
        assert_eq!(Some(to_u8(&inv).unwrap()), gf256_inv(a));
    }
}

#[test]
fn test_crs_matches_reference_for_every_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for len in 1..=CRS_MAX_LEN {
        let (coefficients, elements, constant) = random_seed(&mut rng, len);
        let mut reference = ReferenceCrs::new(&coefficients, &elements, constant);
        let mut crs = Crs::new(&CrsConfig::new(coefficients, elements, constant)).unwrap();

        let expected = reference.take(256);
        let actual: Vec<u8> = (0..256).map(|_| crs.next_byte()).collect();
        assert_eq!(actual, expected, "len = {}", len);
    }
}

#[test]
fn test_crs_known_answers() {
    let cases: [(&[u8], &[u8], u8, &str); 3] = [
        (&[1, 1], &[0, 1], 0x00, "0100010100010100"),
        (&[0x1b, 0x02, 0x01], &[1, 2, 3], 0x63, "7f2c9c5aef204d3f81bdb2acf2096143"),
        (
            &[0x53, 0xca, 0x00, 0x01],
            &[0xde, 0xad, 0xbe, 0xef],
            0x42,
            "74f7de189cb3543dddb01cff7600f3e5c28aed10150fe80a416e205c2480ad4b",
        ),
    ];

    for (coefficients, elements, constant, expected) in cases {
        let seed = CrsConfig::new(coefficients.to_vec(), elements.to_vec(), constant);
        let mut crs = Crs::new(&seed).unwrap();
        let expected = hex::decode(expected).unwrap();
        let actual: Vec<u8> = (0..expected.len()).map(|_| crs.next_byte()).collect();
        assert_eq!(hex::encode(&actual), hex::encode(&expected));
    }
}
