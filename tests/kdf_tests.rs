//! tests/kdf_tests.rs
//! PBKDF2-HMAC-SHA256 key derivation against known vectors

use aesfile::aliases::{Aes256Key32, Salt16};
use aesfile::{derive_key, derive_secure_pbkdf2_key, AesFileError, CryptoParams};
use serde::Deserialize;
use zeroize::Zeroizing;

#[derive(Debug, Deserialize)]
struct KdfVector {
    password: String,
    salt_hex: String,
    iterations: u32,
    key_hex: String,
}

fn load_vectors() -> Vec<KdfVector> {
    let json = include_str!("test_data/pbkdf2_sha256_vectors.json");
    serde_json::from_str(json).expect("Failed to parse PBKDF2 vectors")
}

#[test]
fn pbkdf2_known_vectors() {
    for (i, v) in load_vectors().iter().enumerate() {
        let salt = hex::decode(&v.salt_hex).unwrap();
        let mut key: Aes256Key32 = Zeroizing::new([0u8; 32]);
        derive_secure_pbkdf2_key(&v.password, &salt, v.iterations, &mut key)
            .unwrap_or_else(|e| panic!("vector {i}: {e}"));
        assert_eq!(hex::encode(*key), v.key_hex, "vector {i} ({} iterations)", v.iterations);
    }
}

#[test]
fn derive_key_matches_buffer_api() {
    let salt: Salt16 = [0x11; 16];
    let params = CryptoParams::new().with_iterations(1000);

    let key = derive_key("correct horse battery staple", &salt, &params).unwrap();
    assert_eq!(
        hex::encode(*key),
        "e0fa88d783bbccaa9d4cea3b2aa9d6b781d54728d175b7c0ad1272b9531b9e22"
    );
}

#[test]
fn derivation_is_deterministic() {
    let params = CryptoParams::new().with_iterations(10);
    let salt: Salt16 = [0x5A; 16];
    let a = derive_key("same password", &salt, &params).unwrap();
    let b = derive_key("same password", &salt, &params).unwrap();
    assert_eq!(*a, *b);
}

#[test]
fn salt_password_and_cost_each_change_the_key() {
    let params = CryptoParams::new().with_iterations(10);
    let base = derive_key("password", &[0x01; 16], &params).unwrap();

    let other_salt = derive_key("password", &[0x02; 16], &params).unwrap();
    let other_password = derive_key("Password", &[0x01; 16], &params).unwrap();
    let other_cost =
        derive_key("password", &[0x01; 16], &CryptoParams::new().with_iterations(11)).unwrap();

    assert_ne!(*base, *other_salt);
    assert_ne!(*base, *other_password);
    assert_ne!(*base, *other_cost);
}

#[test]
fn bad_inputs_are_kdf_errors() {
    let params = CryptoParams::new().with_iterations(1);
    let cases: [(&str, &[u8]); 3] = [("", &[0u8; 16]), ("pw", &[0u8; 15]), ("pw", &[0u8; 17])];

    for (password, salt) in cases {
        let err = derive_key(password, salt, &params).unwrap_err();
        assert!(matches!(err, AesFileError::Kdf(_)), "{password:?}/{}", salt.len());
    }
}

#[test]
fn iteration_bounds_are_inclusive() {
    let salt = [0u8; 16];
    assert!(derive_key("pw", &salt, &CryptoParams::new().with_iterations(1)).is_ok());
    assert!(derive_key("pw", &salt, &CryptoParams::new().with_iterations(0)).is_err());
    assert!(derive_key("pw", &salt, &CryptoParams::new().with_iterations(5_000_001)).is_err());
}
