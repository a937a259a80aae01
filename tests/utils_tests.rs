//! tests/utils_tests.rs
//! Block-level building blocks: padding, XOR, and raw CBC

use aesfile::decryptor::decrypt_cbc;
use aesfile::encryptor::encrypt_cbc;
use aesfile::padding::{pad, unpad};
use aesfile::utils::{padded_len, xor_blocks};
use aesfile::AesFileError;
use zeroize::Zeroizing;

// SP 800-38A F.2.5, first two blocks
const NIST_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const NIST_PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
const NIST_CIPHERTEXT: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd69cfc4e967edb808d679f777bc6702c7d";

fn nist_key() -> Zeroizing<[u8; 32]> {
    Zeroizing::new(hex::decode(NIST_KEY).unwrap().try_into().unwrap())
}

#[test]
fn encrypt_cbc_matches_nist_vector() {
    let iv: [u8; 16] = core::array::from_fn(|i| i as u8);
    let plaintext = hex::decode(NIST_PLAINTEXT).unwrap();

    let mut ciphertext = Vec::new();
    encrypt_cbc(&nist_key(), &iv, &plaintext, &mut ciphertext);
    assert_eq!(hex::encode(&ciphertext), NIST_CIPHERTEXT);
}

#[test]
fn decrypt_cbc_matches_nist_vector() {
    let iv: [u8; 16] = core::array::from_fn(|i| i as u8);
    let ciphertext = hex::decode(NIST_CIPHERTEXT).unwrap();

    let plaintext = decrypt_cbc(&nist_key(), &iv, &ciphertext);
    assert_eq!(hex::encode(&plaintext[..]), NIST_PLAINTEXT);
}

#[test]
fn encrypt_cbc_appends_to_existing_output() {
    let iv = [0u8; 16];
    let mut output = vec![0xFFu8; 3];
    encrypt_cbc(&nist_key(), &iv, &[0u8; 32], &mut output);
    assert_eq!(output.len(), 35);
    assert_eq!(&output[..3], &[0xFF; 3]);
}

#[test]
fn pad_then_unpad_every_length_up_to_three_blocks() {
    for len in 0..=48usize {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let padded = pad(&data);

        assert_eq!(padded.len(), padded_len(len), "len {len}");
        assert_eq!(padded.len() % 16, 0);
        assert!(padded.len() > len);
        assert_eq!(unpad(&padded).unwrap(), &data[..], "len {len}");
    }
}

#[test]
fn unpad_error_is_opaque() {
    let err = unpad(&[0u8; 16]).unwrap_err();
    assert!(matches!(err, AesFileError::InvalidPadding));
    assert_eq!(err.to_string(), "decryption failed");
}

#[test]
fn unpad_checks_every_pad_byte() {
    for pad_len in 2..=16usize {
        for wrong in 16 - pad_len..15 {
            let mut block = [0x41u8; 16];
            block[16 - pad_len..].fill(pad_len as u8);
            block[wrong] ^= 0x80;
            assert!(
                matches!(unpad(&block), Err(AesFileError::InvalidPadding)),
                "pad {pad_len}, corrupted byte {wrong}"
            );
        }
    }
}

#[test]
fn xor_blocks_basic() {
    let a = [0xF0u8; 16];
    let b = [0x0Fu8; 16];
    let mut out = [0u8; 16];
    xor_blocks(&a, &b, &mut out);
    assert_eq!(out, [0xFFu8; 16]);

    xor_blocks(&a, &a, &mut out);
    assert_eq!(out, [0u8; 16]);
}
