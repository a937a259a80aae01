//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions: plaintext ⊕ previous ciphertext before
/// encryption, cipher output ⊕ previous ciphertext after decryption.
///
/// # Panics (by contract)
///
/// Panics if any slice is shorter than 16 bytes. Callers only pass
/// `chunks_exact(16)` chunks and fixed `[u8; 16]` buffers.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Number of padded bytes a plaintext of `plaintext_len` bytes occupies.
///
/// Always strictly greater than `plaintext_len`: aligned inputs gain a full block.
#[inline]
#[must_use]
pub const fn padded_len(plaintext_len: usize) -> usize {
    (plaintext_len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let a = [0xA5u8; 16];
        let b: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut once = [0u8; 16];
        let mut twice = [0u8; 16];
        xor_blocks(&a, &b, &mut once);
        xor_blocks(&once, &b, &mut twice);
        assert_eq!(twice, a);
    }

    #[test]
    fn padded_len_always_adds_at_least_one_byte() {
        assert_eq!(padded_len(0), 16);
        assert_eq!(padded_len(11), 16);
        assert_eq!(padded_len(15), 16);
        assert_eq!(padded_len(16), 32);
        assert_eq!(padded_len(17), 32);
    }
}
