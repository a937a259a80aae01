//! src/decryptor/decrypt.rs
//! Password-based decryption of a salt ‖ IV ‖ ciphertext container.

use crate::builders::CryptoParams;
use crate::crypto::kdf::derive_key;
use crate::decryptor::cbc::decrypt_cbc;
use crate::decryptor::read::split_container;
use crate::error::AesFileError;
use crate::padding::unpad;
use std::io::{Read, Write};
use zeroize::Zeroizing;

/// Decrypt a container produced by [`encrypt`](crate::encrypt).
///
/// `params` must carry the iteration count used at encryption time; the
/// container does not record it.
///
/// # Errors
///
/// - [`AesFileError::MalformedContainer`] - shorter than 32 bytes, or the
///   ciphertext part is empty or not block-aligned
/// - [`AesFileError::InvalidPadding`] - wrong password or corrupted data
/// - [`AesFileError::Kdf`] - empty password or invalid iteration count
///
/// There is no authentication tag: a damaged container can still pass the
/// padding check and decrypt to wrong bytes.
pub fn decrypt(
    container: &[u8],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<u8>, AesFileError> {
    let (header, ciphertext) = split_container(container)?;

    let key = derive_key(password, &header.salt, params)?;
    let padded = decrypt_cbc(&key, &header.iv, ciphertext);
    let plaintext = unpad(&padded)?.to_vec();

    tracing::debug!(
        container_len = container.len(),
        plaintext_len = plaintext.len(),
        "decrypted container"
    );
    Ok(plaintext)
}

/// Read a whole container from `input`, decrypt it and write the plaintext to
/// `output`. Returns the number of plaintext bytes written.
///
/// Nothing is written unless decryption fully succeeds.
pub fn decrypt_to_writer<R, W>(
    mut input: R,
    mut output: W,
    password: &str,
    params: &CryptoParams,
) -> Result<usize, AesFileError>
where
    R: Read,
    W: Write,
{
    let mut container = Vec::new();
    input.read_to_end(&mut container)?;

    let plaintext = Zeroizing::new(decrypt(&container, password, params)?);
    output.write_all(&plaintext)?;
    output.flush()?;

    Ok(plaintext.len())
}
