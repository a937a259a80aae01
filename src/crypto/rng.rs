//! src/crypto/rng.rs
//! Secure randomness for per-file salts and IVs.
//!
//! Every byte comes from the operating system CSPRNG (`OsRng`). A failed read
//! surfaces as [`AesFileError::RandomSource`]; nothing falls back to a
//! user-space generator.

use crate::error::AesFileError;
use rand::{rngs::OsRng, TryRngCore};

/// Extension trait – gives `try_random()` to fixed-size byte arrays.
pub trait SecureRandomExt: Sized {
    /// Fill a fresh instance from the OS random source.
    fn try_random() -> Result<Self, AesFileError>;
}

impl<const N: usize> SecureRandomExt for [u8; N] {
    #[inline]
    fn try_random() -> Result<Self, AesFileError> {
        let mut bytes = [0u8; N];
        fill_random(&mut bytes)?;
        Ok(bytes)
    }
}

/// Fill `dest` from the OS random source.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), AesFileError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| AesFileError::RandomSource(e.to_string()))
}
