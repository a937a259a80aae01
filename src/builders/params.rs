//! src/builders/params.rs
//! Immutable cost/size parameters shared by key derivation and the envelope.

use crate::aliases::Aes256Key32;
use crate::consts::{
    BLOCK_SIZE, DEFAULT_PBKDF2_ITERATIONS, IV_LEN, KEY_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER,
    SALT_LEN,
};
use crate::crypto::kdf::derive_key;
use crate::error::AesFileError;

/// Parameters for one encrypt/decrypt call.
///
/// Defaults to [`DEFAULT_PBKDF2_ITERATIONS`]. Field sizes are fixed by the
/// container layout and exposed read-only so callers can size buffers
/// without reaching for the constants.
///
/// # Thread Safety
///
/// `Copy + Send + Sync`; share one value across any number of concurrent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoParams {
    iterations: u32,
}

impl CryptoParams {
    /// Parameters with the default iteration count.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }

    /// Set a custom PBKDF2 iteration count.
    ///
    /// Not clamped: an out-of-range value is reported by [`validate`](Self::validate)
    /// and by key derivation, so a bad `--iterations` is never silently changed.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn key_len(&self) -> usize {
        KEY_LEN
    }

    #[must_use]
    pub const fn salt_len(&self) -> usize {
        SALT_LEN
    }

    #[must_use]
    pub const fn iv_len(&self) -> usize {
        IV_LEN
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Check the iteration count against `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
    pub fn validate(&self) -> Result<(), AesFileError> {
        if (PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&self.iterations) {
            Ok(())
        } else {
            Err(AesFileError::Kdf(format!(
                "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {}",
                self.iterations
            )))
        }
    }

    /// Derive the key for `salt` with these parameters.
    #[inline]
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> Result<Aes256Key32, AesFileError> {
        derive_key(password, salt, self)
    }
}

impl Default for CryptoParams {
    fn default() -> Self {
        Self::new()
    }
}
