//! # Key Derivation
//!
//! Stretches a low-entropy password and a per-file salt into the 32-byte
//! AES-256 key with PBKDF2-HMAC-SHA256.
//!
//! [`derive_key`] is the allocating entry point most callers want;
//! [`derive_secure_pbkdf2_key`] writes into a caller-owned buffer.

pub mod pbkdf2;

pub use self::pbkdf2::derive_secure_pbkdf2_key;

use crate::aliases::Aes256Key32;
use crate::builders::CryptoParams;
use crate::error::AesFileError;
use zeroize::Zeroizing;

/// Derive the AES-256 key for `salt` using the cost in `params`.
///
/// Same password, salt and iteration count always give the same key.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    params: &CryptoParams,
) -> Result<Aes256Key32, AesFileError> {
    let mut key = Zeroizing::new([0u8; 32]);
    derive_secure_pbkdf2_key(password, salt, params.iterations(), &mut key)?;
    tracing::trace!(iterations = params.iterations(), "derived key");
    Ok(key)
}
