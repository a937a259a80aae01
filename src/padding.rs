//! # PKCS#7 Padding
//!
//! `pad` always appends between 1 and 16 bytes, each equal to the number of
//! bytes appended, so an aligned plaintext gains a whole block and padding is
//! always present to strip.
//!
//! `unpad` is the only integrity check in the format. A wrong key turns the
//! last block into noise, and noise passes the check with probability of
//! roughly 1/256 at best, so failures here are reported as
//! [`AesFileError::InvalidPadding`] without saying which rule was broken.

use crate::aliases::SecretBytes;
use crate::consts::BLOCK_SIZE;
use crate::error::AesFileError;
use crate::utils::padded_len;
use zeroize::Zeroizing;

/// Pad `plaintext` to the next multiple of [`BLOCK_SIZE`].
#[must_use]
pub fn pad(plaintext: &[u8]) -> SecretBytes {
    let total = padded_len(plaintext.len());
    let pad_len = total - plaintext.len();

    let mut padded = Zeroizing::new(Vec::with_capacity(total));
    padded.extend_from_slice(plaintext);
    padded.resize(total, pad_len as u8);
    padded
}

/// Validate and strip padding, returning the plaintext slice.
///
/// Rejects input that is empty or not block-aligned, a final byte outside
/// `1..=16`, and any trailing pad byte that disagrees with the final byte.
/// The pad bytes are compared without an early exit.
pub fn unpad(padded: &[u8]) -> Result<&[u8], AesFileError> {
    if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
        return Err(AesFileError::InvalidPadding);
    }

    let pad_byte = padded[padded.len() - 1];
    let pad_len = usize::from(pad_byte);
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(AesFileError::InvalidPadding);
    }

    let tail = &padded[padded.len() - pad_len..];
    let mismatch = tail.iter().fold(0u8, |acc, &b| acc | (b ^ pad_byte));
    if mismatch != 0 {
        return Err(AesFileError::InvalidPadding);
    }

    Ok(&padded[..padded.len() - pad_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_gets_partial_block() {
        let padded = pad(b"hello world");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..11], b"hello world");
        assert!(padded[11..].iter().all(|&b| b == 5));
    }

    #[test]
    fn aligned_input_gets_full_block() {
        let data = [0xABu8; 32];
        let padded = pad(&data);
        assert_eq!(padded.len(), 48);
        assert!(padded[32..].iter().all(|&b| b == 16));
        assert_eq!(unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn empty_input_is_one_block_of_sixteens() {
        let padded = pad(b"");
        assert_eq!(&padded[..], &[16u8; 16][..]);
        assert_eq!(unpad(&padded).unwrap(), b"");
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(matches!(unpad(&[]), Err(AesFileError::InvalidPadding)));
        assert!(matches!(unpad(&[1u8; 15]), Err(AesFileError::InvalidPadding)));
        assert!(matches!(unpad(&[1u8; 17]), Err(AesFileError::InvalidPadding)));
    }

    #[test]
    fn rejects_out_of_range_final_byte() {
        let mut block = [0u8; 16];
        assert!(matches!(unpad(&block), Err(AesFileError::InvalidPadding)));
        block[15] = 17;
        assert!(matches!(unpad(&block), Err(AesFileError::InvalidPadding)));
        block[15] = 0xFF;
        assert!(matches!(unpad(&block), Err(AesFileError::InvalidPadding)));
    }

    #[test]
    fn rejects_inconsistent_pad_bytes() {
        let mut block = [4u8; 16];
        block[12] = 3;
        assert!(matches!(unpad(&block), Err(AesFileError::InvalidPadding)));

        // Only the first pad byte is wrong.
        let mut block = [0u8; 16];
        block[8..].fill(8);
        block[8] = 7;
        assert!(matches!(unpad(&block), Err(AesFileError::InvalidPadding)));
    }

    #[test]
    fn a_single_one_is_valid_padding() {
        let mut block = [0x61u8; 16];
        block[15] = 1;
        assert_eq!(unpad(&block).unwrap(), &[0x61u8; 15][..]);
    }
}
