//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, HmacSha256};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER, SALT_LEN};
use crate::error::AesFileError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA256 directly into the caller's key buffer.
///
/// The password is hashed as its UTF-8 bytes. Fails before doing any work if
/// the password is empty, the salt is not [`SALT_LEN`] bytes, or `iterations`
/// is outside `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
#[inline]
pub fn derive_secure_pbkdf2_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
    out_key: &mut Aes256Key32,
) -> Result<(), AesFileError> {
    if password.is_empty() {
        return Err(AesFileError::Kdf("empty password".into()));
    }
    if salt.len() != SALT_LEN {
        return Err(AesFileError::Kdf(format!(
            "salt must be {SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(AesFileError::Kdf(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations, out_key.as_mut_slice())
        .map_err(|e| AesFileError::Kdf(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}
