//! src/encryptor/cbc.rs
//! AES-256-CBC encryption over an already padded buffer.

use crate::aliases::{Aes256Key32, Iv16};
use crate::consts::{BLOCK_SIZE, KEY_LEN};
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use zeroize::Zeroize;

/// Encrypt `padded` in CBC mode and append the ciphertext to `output`.
///
/// `C_i = E_K(P_i ⊕ C_{i-1})` with `C_0 = iv`. `padded` must be a non-empty
/// multiple of [`BLOCK_SIZE`]; [`pad`](crate::padding::pad) guarantees that.
#[inline]
pub fn encrypt_cbc(key: &Aes256Key32, iv: &Iv16, padded: &[u8], output: &mut Vec<u8>) {
    debug_assert!(!padded.is_empty() && padded.len() % BLOCK_SIZE == 0);

    let key_bytes: &[u8; KEY_LEN] = key;
    let cipher = Aes256Enc::new(key_bytes.into());

    // previous ciphertext block
    let mut prev: [u8; BLOCK_SIZE] = *iv;
    // P_i ⊕ C_{i-1}, encrypted in place
    let mut aes_block = AesBlock::default();

    output.reserve(padded.len());
    for plaintext_block in padded.chunks_exact(BLOCK_SIZE) {
        xor_blocks(plaintext_block, &prev, aes_block.as_mut_slice());
        cipher.encrypt_block(&mut aes_block);

        prev.copy_from_slice(&aes_block);
        output.extend_from_slice(&prev);
    }

    aes_block.as_mut_slice().zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    #[test]
    fn key_schedule_is_wiped_on_drop() {
        fn assert_zeroize_on_drop<T: zeroize::ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<Aes256Enc>();
    }

    #[test]
    fn ciphertext_length_matches_input() {
        let key = Zeroizing::new([0x01u8; 32]);
        let mut out = Vec::new();
        encrypt_cbc(&key, &[0u8; 16], &[0x10u8; 48], &mut out);
        assert_eq!(out.len(), 48);
    }

    #[test]
    fn identical_blocks_encrypt_differently() {
        let key = Zeroizing::new([0x02u8; 32]);
        let mut out = Vec::new();
        encrypt_cbc(&key, &[0x33u8; 16], &[0u8; 32], &mut out);
        assert_ne!(out[..16], out[16..]);
    }

    #[test]
    fn iv_changes_every_block() {
        let key = Zeroizing::new([0x03u8; 32]);
        let plain = [0x5Au8; 32];
        let mut a = Vec::new();
        let mut b = Vec::new();
        encrypt_cbc(&key, &[0u8; 16], &plain, &mut a);
        encrypt_cbc(&key, &[1u8; 16], &plain, &mut b);
        assert_ne!(a[..16], b[..16]);
        assert_ne!(a[16..], b[16..]);
    }
}
