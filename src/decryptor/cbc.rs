//! src/decryptor/cbc.rs
//! AES-256-CBC decryption into a wiped-on-drop buffer.

use crate::aliases::{Aes256Key32, Block16, Iv16, SecretBytes};
use crate::consts::{BLOCK_SIZE, KEY_LEN};
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use zeroize::{Zeroize, Zeroizing};

/// Decrypt `ciphertext` in CBC mode, returning the still-padded plaintext.
///
/// `P_i = D_K(C_i) ⊕ C_{i-1}` with `C_0 = iv`. `ciphertext` must be a
/// multiple of [`BLOCK_SIZE`]; callers check framing first.
#[inline]
pub fn decrypt_cbc(key: &Aes256Key32, iv: &Iv16, ciphertext: &[u8]) -> SecretBytes {
    debug_assert!(ciphertext.len() % BLOCK_SIZE == 0);

    let key_bytes: &[u8; KEY_LEN] = key;
    let cipher = Aes256Dec::new(key_bytes.into());

    let mut padded = Zeroizing::new(Vec::with_capacity(ciphertext.len()));
    let mut plaintext_block: Block16 = Zeroizing::new([0u8; BLOCK_SIZE]);
    let mut prev: &[u8] = iv;
    // D_K(C_i), wiped once the loop ends
    let mut aes_block = AesBlock::default();

    for ciphertext_block in ciphertext.chunks_exact(BLOCK_SIZE) {
        aes_block.copy_from_slice(ciphertext_block);
        cipher.decrypt_block(&mut aes_block);

        xor_blocks(&aes_block, prev, &mut plaintext_block[..]);
        padded.extend_from_slice(&plaintext_block[..]);

        prev = ciphertext_block;
    }

    aes_block.as_mut_slice().zeroize();
    padded
}
