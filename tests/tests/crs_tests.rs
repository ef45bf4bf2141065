//! Generator and device integration tests

use std::io::{Read, Write};

use gfcrs_algorithms::stream::{Crs, CrsConfig, CrsState};
use gfcrs_algorithms::Error;
use gfcrs_api::ByteStream;
use gfcrs_rnddev::{DeviceConfig, DeviceError, RndDev};
use gfcrs_tests::{random_seed, ReferenceCrs};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_unit_recurrence() {
    let mut crs = Crs::new(&CrsConfig::new(vec![1u8], vec![1], 0)).unwrap();
    assert!((0..4096).all(|_| crs.next_byte() == 1));
    assert_eq!(crs.state(), CrsState::Stepping);
}

#[test]
fn test_zero_length_rejected() {
    let config = CrsConfig::<u8>::new(Vec::new(), Vec::new(), 0);
    assert_eq!(config.len, 0);
    assert!(matches!(Crs::new(&config), Err(Error::Configuration { .. })));
}

#[test]
fn test_rand_adapter() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let (coefficients, elements, constant) = random_seed(&mut rng, 8);

    let seed = CrsConfig::new(coefficients.clone(), elements.clone(), constant);
    let mut crs = Crs::new(&seed).unwrap();
    let mut reference = ReferenceCrs::new(&coefficients, &elements, constant);

    // Rng::gen builds on RngCore::next_u32
    let word: u32 = crs.gen();
    let bytes = reference.take(4);
    assert_eq!(word, u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));

    let mut buf = [0u8; 100];
    crs.fill(&mut buf[..]);
    assert_eq!(&buf[..], &reference.take(100)[..]);
}

#[test]
fn test_byte_stream_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let (coefficients, elements, constant) = random_seed(&mut rng, 30);

    let seed = CrsConfig::new(coefficients.clone(), elements.clone(), constant);
    let mut crs = Crs::new(&seed).unwrap();
    let mut reference = ReferenceCrs::new(&coefficients, &elements, constant);

    let mut out = vec![0u8; 1000];
    ByteStream::try_fill(&mut crs, &mut out).unwrap();
    assert_eq!(out, reference.take(1000));
    assert_eq!(crs.bytes_generated(), 1000);
}

#[test]
fn test_device_end_to_end() {
    let config = DeviceConfig::from_toml_str(
        r#"
        crs_len = 4
        crs_coeffs = [83, 202, 0, 1]
        crs_elems = [222, 173, 190, 239]
        crs_c = 66
        "#,
    )
    .unwrap();
    let device = RndDev::init(&config).unwrap();

    let mut first = [0u8; 16];
    {
        let mut handle = device.open().unwrap();
        assert!(matches!(device.open(), Err(DeviceError::Busy)));
        handle.read_exact(&mut first).unwrap();
        assert!(handle.write_all(b"seed").is_err());
    }
    assert_eq!(hex::encode(first), "74f7de189cb3543dddb01cff7600f3e5");

    // The sequence continues across opens
    let mut second = [0u8; 16];
    device.open().unwrap().read_exact(&mut second).unwrap();
    assert_eq!(hex::encode(second), "c28aed10150fe80a416e205c2480ad4b");

    assert_eq!(device.bytes_generated().unwrap(), 32);
    device.exit();
}

#[test]
fn test_device_rejects_bad_parameters() {
    let zero = DeviceConfig::default();
    assert!(matches!(RndDev::init(&zero), Err(DeviceError::Core(e)) if e.is_configuration()));

    let big = DeviceConfig::default().with_len(1).with_constant(256);
    assert!(matches!(RndDev::init(&big), Err(DeviceError::Core(e)) if e.is_configuration()));
}
